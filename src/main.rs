//! hotel-desk server entry point.
//!
//! Opens the store, applies the schema, and starts the Axum HTTP server.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hotel_desk::api;
use hotel_desk::app_state::AppState;
use hotel_desk::config::{HotelConfig, LogFormat};
use hotel_desk::persistence::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = HotelConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting hotel-desk");

    // Open the store and bring the schema up to date
    let store = SqliteStore::connect(&config.database)
        .await
        .with_context(|| format!("cannot open database {}", config.database.url))?;
    store.migrate().await.context("schema migration failed")?;

    // Build application
    let app = api::build_app(AppState::new(store.clone()), config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
