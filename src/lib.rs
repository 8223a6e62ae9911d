pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;
pub mod report;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, PullRequestSource};
pub use analysis::{ReportPipeline, ReviewOutcome};
pub use report::{DiscordWebhook, FileSink, ReportFormat, ReportSink};
