use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

use crate::error::{Error, Result};

/// Destination for a rendered report.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn deliver(&self, report: &str, filename: &str) -> Result<()>;
    fn name(&self) -> &str;
}

/// Uploads the report as a file attachment to a Discord-style webhook.
pub struct DiscordWebhook {
    client: Client,
    url: String,
}

impl DiscordWebhook {
    pub const EXPECTED_STATUS: StatusCode = StatusCode::NO_CONTENT;

    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ReportSink for DiscordWebhook {
    async fn deliver(&self, report: &str, filename: &str) -> Result<()> {
        let part = Part::text(report.to_string()).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(&self.url).multipart(form).send().await?;

        let status = response.status();
        if status != Self::EXPECTED_STATUS {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "discord"
    }
}

/// Writes the report to a local file instead of sending it anywhere.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportSink for FileSink {
    async fn deliver(&self, report: &str, _filename: &str) -> Result<()> {
        tokio::fs::write(&self.path, report).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Delivers the report once and logs the outcome.
///
/// Returns whether delivery succeeded; failures are never retried or raised.
pub async fn publish(sink: &dyn ReportSink, report: &str, filename: &str) -> bool {
    match sink.deliver(report, filename).await {
        Ok(()) => {
            tracing::info!(sink = sink.name(), "Report {} delivered", filename);
            true
        }
        Err(Error::Delivery { status, body }) => {
            tracing::error!(sink = sink.name(), "Failed to send file: {}, {}", status, body);
            false
        }
        Err(e) => {
            tracing::error!(sink = sink.name(), "Failed to send file: {}", e);
            false
        }
    }
}
