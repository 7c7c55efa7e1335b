//! HTTP Server
//!
//! Binds the listener and serves the API routes.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::store::LogStore;

use super::handlers;

/// HTTP server for chatlog
pub struct Server {
    config: Config,
    store: Arc<LogStore>,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<LogStore>) -> Self {
        Self { config, store }
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen_addr.as_str()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router(self.store))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Build the API router over a store
pub fn router(store: Arc<LogStore>) -> Router {
    Router::new()
        .route("/api/v1/logs", post(handlers::create_log).get(handlers::get_logs))
        .route("/health", get(handlers::health))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
