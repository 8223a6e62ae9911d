pub mod publisher;
pub mod table;

pub use publisher::{publish, DiscordWebhook, FileSink, ReportSink};
pub use table::{render_json, render_markdown, HEADER};

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::models::UserActivityRow;

/// Picks where the report goes: nowhere for a dry run (stdout), a local
/// file when `output` is set, otherwise the configured webhook.
///
/// Only the webhook path needs `DISCORD_WEBHOOK`.
pub fn select_sink(
    config: &Config,
    output: Option<&Path>,
    dry_run: bool,
) -> Result<Option<Box<dyn ReportSink>>> {
    if dry_run {
        return Ok(None);
    }

    let sink: Box<dyn ReportSink> = match output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(DiscordWebhook::new(config.webhook_url()?)?),
    };
    Ok(Some(sink))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn render(&self, rows: &[UserActivityRow]) -> Result<String> {
        match self {
            ReportFormat::Markdown => Ok(render_markdown(rows)),
            ReportFormat::Json => render_json(rows),
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "pr_report.md",
            ReportFormat::Json => "pr_report.json",
        }
    }
}
