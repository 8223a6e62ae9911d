use async_trait::async_trait;
use reqwest::{header, Client};

use crate::config::{Config, PAGE_SIZE};
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::source::PullRequestSource;
use crate::models::{PullRequest, Review};

pub struct GitHubClient {
    client: Client,
    base_url: String,
    per_page: u32,
}

impl GitHubClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(&config.github_token, &config.github_api_url)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("pr-report/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page: PAGE_SIZE,
        })
    }

    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

#[async_trait]
impl PullRequestSource for GitHubClient {
    async fn list_pull_requests(&self, repo: &str) -> Result<Vec<PullRequest>> {
        let url = format!("{}/repos/{}/pulls?state=all", self.base_url, repo);
        let paginator = Paginator::new(&self.client);
        tracing::debug!("Listing pull requests for: {}", repo);
        paginator.fetch_until_empty(&url, self.per_page).await
    }

    async fn list_reviews(&self, repo: &str, number: u64) -> Result<Vec<Review>> {
        let url = format!("{}/repos/{}/pulls/{}/reviews", self.base_url, repo, number);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch reviews for PR {} in {}: {} - {}",
                number, repo, status, body
            )));
        }

        Ok(response.json().await?)
    }
}
