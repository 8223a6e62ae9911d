use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pr_report::report::{publish, select_sink};
use pr_report::{Config, GitHubClient, PipelineConfig, ReportFormat, ReportPipeline};

#[derive(Parser, Debug)]
#[command(name = "pr-report")]
#[command(version = "0.1.0")]
#[command(about = "Report weekly pull request and review activity to a chat webhook")]
struct Args {
    /// Length of the trailing window in days
    #[arg(long, default_value = "7", value_parser = clap::value_parser!(i64).range(1..=3650))]
    days: i64,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Markdown)]
    format: ReportFormat,

    /// Write the report to this file instead of the webhook
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the report to stdout and skip publishing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pr_report=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    config.window_days = args.days;

    let sink = select_sink(&config, args.output.as_deref(), args.dry_run)?;

    let github = GitHubClient::from_config(&config)?;
    let pipeline = ReportPipeline::new(github, PipelineConfig::from(&config));

    let rows = pipeline.collect(&config.repositories, Utc::now()).await?;
    tracing::info!(
        "Collected {} rows across {} repositories",
        rows.len(),
        config.repositories.len()
    );

    let report = args.format.render(&rows)?;

    match sink {
        Some(sink) => {
            let delivered = publish(sink.as_ref(), &report, args.format.filename()).await;
            tracing::debug!(delivered, "Run finished");
        }
        None => println!("{}", report),
    }

    Ok(())
}
