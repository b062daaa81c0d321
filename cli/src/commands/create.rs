//! Create command - register a consignment on a running service.

use anyhow::{bail, Context, Result};
use consignment_core::{Consignment, Container, CreateResponse};
use serde_json::Value;

use super::consignments_url;

pub async fn run(
    server: &str,
    weight: i32,
    containers: Vec<String>,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let containers = containers.into_iter().map(Container::new).collect();
    let consignment =
        Consignment::new(weight, containers).with_description(description.unwrap_or_default());

    let url = consignments_url(server);
    let response = reqwest::Client::new()
        .post(&url)
        .json(&consignment)
        .send()
        .await
        .with_context(|| format!("Failed to reach consignment service at {}", url))?;

    let status = response.status();
    let text = response.text().await?;
    let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

    if !status.is_success() {
        if body.is_null() {
            bail!("Consignment not created ({}): {}", status, text.trim());
        }
        let kind = body["error"]["kind"].as_str().unwrap_or("unknown");
        let message = body["error"]["message"].as_str().unwrap_or("no details");
        bail!("Consignment not created ({}, {}): {}", status, kind, message);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let created: CreateResponse = serde_json::from_value(body)?;
    println!(
        "Created consignment: weight {}, {} containers, vessel {}",
        created.consignment.weight,
        created.consignment.containers.len(),
        created.consignment.vessel_id
    );
    Ok(())
}
