//! Role Inventory HTTP Server
//!
//! Serves the questionnaire and scores submitted allocations.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use role_inventory::adapters::{scoring_router, source_from_config, ScoringAppState};
use role_inventory::application::load_instrument;
use role_inventory::config::AppConfig;
use role_inventory::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    // Initialize tracing
    telemetry::init(&config.server)?;
    info!(environment = ?config.server.environment, "Configuration loaded");

    // Load and validate the instrument; any violation aborts startup
    let source = source_from_config(&config.instrument)?;
    let instrument = load_instrument(source.as_ref())?;

    let app = scoring_router(ScoringAppState::new(instrument));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
