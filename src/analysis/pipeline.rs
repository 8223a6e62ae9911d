use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;

use crate::analysis::aggregator::aggregate;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::github::PullRequestSource;
use crate::models::{filter_window, PullRequest, Review, UserActivityRow};

/// Result of fetching one pull request's reviews. Always carries a review
/// list; failures degrade to an empty one.
#[derive(Debug)]
pub enum ReviewOutcome {
    Fetched(Vec<Review>),
    Fallback { reason: String },
}

impl ReviewOutcome {
    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewOutcome::Fetched(reviews) => reviews,
            ReviewOutcome::Fallback { .. } => Vec::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ReviewOutcome::Fallback { .. })
    }
}

pub struct ReportPipeline {
    source: Arc<dyn PullRequestSource>,
    config: PipelineConfig,
}

impl ReportPipeline {
    pub fn new(source: impl PullRequestSource + 'static, config: PipelineConfig) -> Self {
        Self {
            source: Arc::new(source),
            config,
        }
    }

    /// Start of the trailing window ending at `now`.
    pub fn window_start(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let days = self.config.window_days;
        if days < 1 {
            return Err(Error::Config(format!("window must be at least one day, got {}", days)));
        }

        Duration::try_days(days)
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| Error::Config(format!("window of {} days is out of range", days)))
    }

    /// Collects rows for every repository, in the order given.
    ///
    /// A failed pull request listing aborts the run.
    pub async fn collect(
        &self,
        repositories: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<UserActivityRow>> {
        let window_start = self.window_start(now)?;
        let mut rows = Vec::new();

        for repo in repositories {
            tracing::info!("Collecting from {}...", repo);
            let repo_rows = self.collect_repository(repo, window_start).await?;
            tracing::info!(repository = %repo, users = repo_rows.len(), "Aggregated activity");
            rows.extend(repo_rows);
        }

        Ok(rows)
    }

    pub async fn collect_repository(
        &self,
        repo: &str,
        window_start: DateTime<Utc>,
    ) -> Result<Vec<UserActivityRow>> {
        let prs = self.source.list_pull_requests(repo).await?;
        let total = prs.len();
        let prs = filter_window(prs, window_start);
        tracing::info!(
            repository = %repo,
            "Found {} pull requests, {} in window",
            total,
            prs.len()
        );

        let reviews = self.fetch_reviews(repo, &prs).await;
        Ok(aggregate(repo, &prs, &reviews))
    }

    /// Fetches reviews for every pull request with bounded concurrency.
    ///
    /// Returns once every submitted number has an entry, fetched or empty.
    pub async fn fetch_reviews(
        &self,
        repo: &str,
        prs: &[PullRequest],
    ) -> HashMap<u64, Vec<Review>> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit.max(1)));

        let pb = ProgressBar::new(prs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} reviews")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        let review_futures = prs.iter().map(|pr| {
            let source = self.source.clone();
            let sem = semaphore.clone();
            let repo = repo.to_string();
            let number = pr.number;
            let timeout = self.config.review_timeout;
            let pb_clone = pb.clone();

            async move {
                let outcome = match sem.acquire().await {
                    Ok(_permit) => fetch_review_outcome(source.as_ref(), &repo, number, timeout).await,
                    Err(e) => ReviewOutcome::Fallback {
                        reason: e.to_string(),
                    },
                };

                if let ReviewOutcome::Fallback { reason } = &outcome {
                    tracing::warn!(
                        repository = %repo,
                        pr = number,
                        "Failed to fetch reviews for PR {} in {}: {}",
                        number,
                        repo,
                        reason
                    );
                }

                pb_clone.inc(1);
                (number, outcome)
            }
        });

        let results = join_all(review_futures).await;
        pb.finish_and_clear();

        results
            .into_iter()
            .map(|(number, outcome)| (number, outcome.into_reviews()))
            .collect()
    }
}

async fn fetch_review_outcome(
    source: &dyn PullRequestSource,
    repo: &str,
    number: u64,
    timeout: std::time::Duration,
) -> ReviewOutcome {
    let result = match tokio::time::timeout(timeout, source.list_reviews(repo, number)).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout(timeout)),
    };

    match result {
        Ok(reviews) => ReviewOutcome::Fetched(reviews),
        Err(e) => ReviewOutcome::Fallback {
            reason: e.to_string(),
        },
    }
}
