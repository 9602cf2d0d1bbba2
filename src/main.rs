//! Taskdeck - personal task-tracking service

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskdeck::{
    config::Args,
    server::{self, AppState},
    store::{seed, MemStore, Storage},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("taskdeck={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // Print startup banner
    info!("======================================");
    info!("  Taskdeck - personal task tracker");
    info!("======================================");
    info!("Listen: {}", args.listen);
    info!("User: {}", args.user_id);
    info!("Seed demo data: {}", args.seed_demo_data);
    info!("======================================");

    let store: Arc<dyn Storage> = Arc::new(MemStore::new());

    if args.seed_demo_data {
        seed::seed_demo_data(store.as_ref(), &args.user_id).await?;
        info!("Seeded demo categories and stats for {}", args.user_id);
    }

    let state = Arc::new(AppState::new(args, store));
    server::run(state).await?;

    Ok(())
}
