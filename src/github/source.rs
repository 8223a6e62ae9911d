use async_trait::async_trait;

use crate::error::Result;
use crate::models::{PullRequest, Review};

/// Read side of the issue tracker.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Every pull request in the repository, in any state, in page order.
    async fn list_pull_requests(&self, repo: &str) -> Result<Vec<PullRequest>>;

    async fn list_reviews(&self, repo: &str, number: u64) -> Result<Vec<Review>>;
}
