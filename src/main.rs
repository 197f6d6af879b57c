mod birthday;
mod config;
mod constants;
mod feed;
mod models;
mod render;
mod schedule;
mod server;
mod utils;

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    constants::LOG_DIRECTIVE,
    feed::FeedLoader,
    models::AppState,
    schedule::start_refresh_manager,
    server::run_server,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // The first load must succeed, later refreshes may fail
    let loader = FeedLoader::new(config.feed.clone());
    let dataset = match loader.load().await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load birthday feed from {}: {}", loader.source(), e);
            std::process::exit(1);
        }
    };

    if dataset.is_empty() {
        warn!("Birthday feed contains no valid rows");
    }

    let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(dataset));

    if let Some(schedule) = config.refresh.clone() {
        start_refresh_manager(loader, schedule, snapshot_tx);
        info!("Feed refresh task started");
    } else {
        info!("FEED_REFRESH_CRON not set, feed is loaded once");
        drop(snapshot_tx);
    }

    let state = AppState::new(snapshot_rx, config.timezone);
    info!("Using timezone {} for today's date", config.timezone.name());

    if let Err(e) = run_server(config.addr, state).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive"))
                .add_directive("tower_http=info".parse().expect("valid log directive")),
        )
        .init();
}
