mod adapters;
mod application;
mod config;
mod domain;
mod ports;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{FileReportStore, UnifiedDiffer, WaybackAdapter};
use application::{ChangeTracker, RunOutcome};
use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("waydiff={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting waydiff v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    // One client for both the index query and the capture downloads
    let mut http = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.request_timeout() {
        http = http.timeout(timeout);
    }
    let wayback = WaybackAdapter::new(http.build()?, config.wayback());
    let reports = Arc::new(FileReportStore::new(config.output_path.clone()));

    let tracker = ChangeTracker::new(
        Arc::new(wayback.archive_index()),
        Arc::new(wayback.content_source()),
        Arc::new(UnifiedDiffer::new(config.context_lines)),
        reports.clone(),
    )
    .with_fetch_concurrency(config.fetch_concurrency);

    info!("✓ Tracking {}", config.target_url);

    match tracker.run(&config.target_url).await? {
        RunOutcome::NotEnoughVersions { found } => {
            info!("Archive returned {} usable capture(s), no report written", found);
        }
        RunOutcome::Completed { pairs, blocks } => {
            info!("✓ Compared {} pair(s), {} with changes", pairs, blocks);
            info!("Differences saved to {}", reports.path().display());
        }
    }

    Ok(())
}
