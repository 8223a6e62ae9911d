use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Walks `page=1, 2, ...` until the API returns an empty page.
    ///
    /// Pages are concatenated in request order. There is no upper bound on the
    /// number of pages, and any failed page aborts the whole listing.
    pub async fn fetch_until_empty<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::GitHubApi(format!(
                    "Failed to fetch page {} of {}: {} - {}",
                    page, base_url, status, body
                )));
            }

            let items: Vec<T> = response.json().await?;
            if items.is_empty() {
                break;
            }

            all_items.extend(items);
            page += 1;
        }

        Ok(all_items)
    }
}
