//! Remote vessel service client over HTTP/JSON.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tokio::time::timeout;
use tracing::debug;

use crate::domain::{Specification, Vessel};
use crate::error::{Error, Result};
use crate::ports::VesselFinder;

/// Path of the find-available endpoint on the vessel service.
const FIND_AVAILABLE_PATH: &str = "/vessels/find";

/// Response body of the find-available endpoint.
#[derive(Debug, Deserialize)]
struct FindResponse {
    vessel: Vessel,
}

/// Queries a remote vessel service.
pub struct HttpVesselFinder {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpVesselFinder {
    /// Create a client for the vessel service at `base_url`.
    ///
    /// Each lookup is abandoned after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), FIND_AVAILABLE_PATH),
            timeout,
        })
    }

    /// Returns the full URL lookups are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, spec: Specification) -> Result<Vessel> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&spec)
            .send()
            .await
            .map_err(|e| Error::RemoteCallFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let body: FindResponse = response
                    .json()
                    .await
                    .map_err(|e| Error::RemoteCallFailed(format!("Invalid response: {}", e)))?;
                Ok(body.vessel)
            }
            StatusCode::NOT_FOUND => Err(Error::VesselUnavailable(format!(
                "no vessel for max weight {} and capacity {}",
                spec.max_weight, spec.capacity
            ))),
            status => {
                let text = response.text().await.unwrap_or_default();
                Err(Error::RemoteCallFailed(format!(
                    "vessel service returned {}: {}",
                    status,
                    text.trim()
                )))
            }
        }
    }
}

impl VesselFinder for HttpVesselFinder {
    async fn find_available(&self, spec: Specification) -> Result<Vessel> {
        debug!(endpoint = %self.endpoint, ?spec, "querying vessel service");

        match timeout(self.timeout, self.request(spec)).await {
            Ok(result) => result,
            Err(_) => Err(Error::RemoteCallFailed(format!(
                "vessel lookup timed out after {:?}",
                self.timeout
            ))),
        }
    }
}
