//! Serve command - run the consignment service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use super::config_store;
use crate::server::{router, AppState};

pub async fn run(
    config_path: Option<PathBuf>,
    listen: Option<String>,
    vessel_url: Option<String>,
) -> Result<()> {
    let store = config_store(config_path)?;
    let mut config = store.load().await?;

    // Command-line and environment overrides
    if let Some(listen) = listen {
        config.listen_addr = listen;
    }
    if let Some(url) = vessel_url {
        config.vessel_service.url = url;
    }

    info!(
        service = %config.service_name,
        version = %config.version,
        config = %store.config_path().display(),
        "starting consignment service"
    );

    let listen_addr = config.listen_addr.clone();
    let state = Arc::new(AppState::from_config(config)?);

    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    info!("listening on {}", listen_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("consignment service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
