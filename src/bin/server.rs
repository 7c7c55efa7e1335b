//! chatlog Server Binary
//!
//! Starts the HTTP server for chatlog.

use std::sync::Arc;

use chatlog::network::Server;
use chatlog::{Config, LogStore};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// chatlog Server
#[derive(Parser, Debug)]
#[command(name = "chatlog-server")]
#[command(about = "HTTP service persisting chat logs as date-partitioned JSON files")]
#[command(version)]
struct Args {
    /// Storage directory
    #[arg(short, long, default_value = "./storage")]
    storage_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:8090")]
    listen: String,

    /// Partition file size in MB before rolling over
    #[arg(short = 'm', long, default_value = "100")]
    max_file_mb: u64,

    /// Days covered by a query without a start date
    #[arg(long, default_value = "7")]
    lookback_days: u32,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,chatlog=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("chatlog server v{}", chatlog::VERSION);
    tracing::info!("Storage directory: {}", args.storage_dir);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .storage_dir(&args.storage_dir)
        .listen_addr(&args.listen)
        .max_file_size(args.max_file_mb * 1024 * 1024)
        .lookback_days(args.lookback_days)
        .build();

    // Open store
    let store = match LogStore::open(config.clone()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to open log store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Server::new(config, store).run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
