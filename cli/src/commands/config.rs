//! Config command - inspect or initialise the configuration file.

use std::path::PathBuf;

use anyhow::{bail, Result};
use consignment_core::ServiceConfig;

use super::config_store;

pub async fn show(config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let store = config_store(config_path)?;
    let config = store.load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let source = if store.exists() { "" } else { " (not found, using defaults)" };
    println!("Config file:     {}{}", store.config_path().display(), source);
    println!("Service:         {} ({})", config.service_name, config.version);
    println!("Listen address:  {}", config.listen_addr);

    if config.fleet.is_empty() {
        println!(
            "Vessel service:  {} (timeout {} ms)",
            config.vessel_service.url, config.vessel_service.timeout_ms
        );
    } else {
        println!("Local fleet:");
        for vessel in &config.fleet {
            println!("  - {}", vessel);
        }
    }

    match config.max_consignments {
        Some(limit) => println!("Store limit:     {} consignments", limit),
        None => println!("Store limit:     unbounded"),
    }

    Ok(())
}

pub async fn init(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let store = config_store(config_path)?;

    if store.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            store.config_path().display()
        );
    }

    store.save(&ServiceConfig::default()).await?;
    println!("Wrote {}", store.config_path().display());
    Ok(())
}
