use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

/// Repositories covered by the weekly report, in report order.
pub const REPOSITORIES: &[&str] = &[
    "Liatoshynsky-Foundation/lf-client",
    "Liatoshynsky-Foundation/lf-admin",
];

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 10;
pub const DEFAULT_REVIEW_TIMEOUT_SECS: u64 = 10;
pub const PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub github_api_url: String,
    pub webhook_url: Option<String>,
    pub repositories: Vec<String>,
    pub window_days: i64,
    pub concurrency_limit: usize,
    pub review_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = lookup("GITHUB_TOKEN")
            .ok_or_else(|| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let github_api_url = lookup("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let webhook_url = lookup("DISCORD_WEBHOOK");

        let concurrency_limit = lookup("CONCURRENCY_LIMIT")
            .and_then(|v| v.parse().ok())
            .filter(|limit: &usize| *limit > 0)
            .unwrap_or(DEFAULT_CONCURRENCY_LIMIT);

        let review_timeout_secs = lookup("REVIEW_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(DEFAULT_REVIEW_TIMEOUT_SECS);

        let repositories = validate_repositories(REPOSITORIES)?;

        Ok(Self {
            github_token,
            github_api_url,
            webhook_url,
            repositories,
            window_days: DEFAULT_WINDOW_DAYS,
            concurrency_limit,
            review_timeout_secs,
        })
    }

    pub fn webhook_url(&self) -> Result<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| Error::Config("DISCORD_WEBHOOK environment variable not set".to_string()))
    }
}

fn validate_repositories(repos: &[&str]) -> Result<Vec<String>> {
    repos
        .iter()
        .map(|repo| {
            let repo = repo.trim();
            if repo.is_empty() {
                Err(Error::Config("repository identifier must not be empty".to_string()))
            } else {
                Ok(repo.to_string())
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub window_days: i64,
    pub concurrency_limit: usize,
    pub review_timeout: Duration,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            window_days: config.window_days,
            concurrency_limit: config.concurrency_limit,
            review_timeout: Duration::from_secs(config.review_timeout_secs),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            review_timeout: Duration::from_secs(DEFAULT_REVIEW_TIMEOUT_SECS),
        }
    }
}
