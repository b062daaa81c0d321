//! List command - show all consignments on a running service.

use anyhow::{Context, Result};
use consignment_core::ListResponse;

use super::{consignments_url, truncate};

pub async fn run(server: &str, vessel_filter: Option<String>, json: bool) -> Result<()> {
    let url = consignments_url(server);
    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("Failed to reach consignment service at {}", url))?
        .error_for_status()?;
    let ListResponse { mut consignments } = response.json().await?;

    // Apply filters
    if let Some(ref vessel) = vessel_filter {
        consignments.retain(|c| &c.vessel_id == vessel);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&consignments)?);
        return Ok(());
    }

    if consignments.is_empty() {
        println!("No consignments found.");
        return Ok(());
    }

    // Table header
    println!(
        "{:<12} {:<10} {:<11} {:<16} DESCRIPTION",
        "ID", "WEIGHT", "CONTAINERS", "VESSEL"
    );
    println!("{}", "-".repeat(80));

    for consignment in &consignments {
        let id = if consignment.id.is_empty() {
            "-".to_string()
        } else {
            truncate(&consignment.id, 12)
        };

        println!(
            "{:<12} {:<10} {:<11} {:<16} {}",
            id,
            consignment.weight,
            consignment.containers.len(),
            truncate(&consignment.vessel_id, 16),
            truncate(&consignment.description, 30)
        );
    }

    println!("\nTotal: {} consignments", consignments.len());
    Ok(())
}
