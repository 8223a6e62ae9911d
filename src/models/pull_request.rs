use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub user: Account,
    pub created_at: DateTime<Utc>,
}

impl PullRequest {
    pub fn author(&self) -> &str {
        &self.user.login
    }

    pub fn created_since(&self, window_start: DateTime<Utc>) -> bool {
        self.created_at >= window_start
    }
}

/// Keeps the pull requests created at or after `window_start`, preserving order.
pub fn filter_window(prs: Vec<PullRequest>, window_start: DateTime<Utc>) -> Vec<PullRequest> {
    prs.into_iter()
        .filter(|pr| pr.created_since(window_start))
        .collect()
}
