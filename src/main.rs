//! summary-api server entry point.
//!
//! Loads configuration, prepares storage, and serves the REST API until a
//! shutdown signal arrives.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use summary_api::app::{build_app, shutdown_signal};
use summary_api::app_state::AppState;
use summary_api::config::{LogFormat, ServiceConfig};
use summary_api::persistence::{MemorySummaryStore, PostgresSummaryStore, SummaryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, environment = %config.environment, "starting summary-api");

    // Build storage layer
    let postgres = if config.persistence_enabled {
        let store = PostgresSummaryStore::connect(&config)
            .await
            .context("failed to connect to database")?;
        store
            .init_schema()
            .await
            .context("failed to create database schema")?;
        tracing::info!("database schema ready");
        Some(store)
    } else {
        tracing::warn!("persistence disabled, records are kept in memory");
        None
    };
    let store: Arc<dyn SummaryStore> = match &postgres {
        Some(pg) => Arc::new(pg.clone()) as Arc<dyn SummaryStore>,
        None => Arc::new(MemorySummaryStore::new()),
    };

    // Build router
    let app = build_app(AppState::new(store, &config.environment, config.testing));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pg) = postgres {
        pg.close().await;
    }
    tracing::info!("shut down");

    Ok(())
}
