use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::info;

use aftercredits::application::{CrawlEngine, render_report};
use aftercredits::cli::Cli;
use aftercredits::infrastructure::config::AppConfig;
use aftercredits::infrastructure::http_client::{HttpClient, HttpClientConfig};
use aftercredits::infrastructure::logging::{self, init_logging};
use aftercredits::infrastructure::store::StingerStore;
use aftercredits::infrastructure::{readme, worktree};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.trace)?;

    logging::separator("Scraping AfterCredits");
    let start = Instant::now();

    let config = AppConfig::default();
    let mut http_config = HttpClientConfig::from_app_config(&config);
    http_config.log_requests = cli.log_requests;

    let client = HttpClient::with_config(http_config)?;
    let engine = CrawlEngine::new(client, &config)?;

    let mut store = StingerStore::load(&config.store_path)?;
    let summary = engine.crawl(&config.start_url, &mut store).await?;
    store.save(&config.store_path)?;

    if worktree::modified_with_extension(Path::new("."), "yml")? {
        readme::update_timestamp(&config.readme_path, Utc::now())?;
    }

    logging::separator("AfterCredits Report");
    for line in render_report(&summary.records) {
        info!("{}", line);
    }

    logging::separator("AfterCredits Finished");
    info!("Total Runtime: {}", format_runtime(start.elapsed()));
    Ok(())
}

fn format_runtime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
