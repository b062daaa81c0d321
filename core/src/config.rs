//! Service configuration.
//!
//! Stored as JSON, by default at `~/.shippy/consignment-service.json`.
//! A missing file means "all defaults".

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::Vessel;
use crate::error::{Error, Result};

/// Settings for the remote vessel service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselServiceConfig {
    /// Base URL of the vessel service.
    #[serde(default = "default_vessel_url")]
    pub url: String,

    /// Deadline for a single lookup, in milliseconds.
    #[serde(default = "default_timeout_ms", rename = "timeoutMs")]
    pub timeout_ms: u64,
}

impl VesselServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for VesselServiceConfig {
    fn default() -> Self {
        Self {
            url: default_vessel_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name the service advertises itself under.
    #[serde(default = "default_service_name", rename = "serviceName")]
    pub service_name: String,

    /// Advertised version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Address the HTTP transport binds to.
    #[serde(default = "default_listen_addr", rename = "listenAddr")]
    pub listen_addr: String,

    /// Remote vessel service settings.
    #[serde(default, rename = "vesselService")]
    pub vessel_service: VesselServiceConfig,

    /// Local fleet. When non-empty it is used instead of the remote service.
    #[serde(default)]
    pub fleet: Vec<Vessel>,

    /// Upper bound on stored consignments. Unbounded when absent.
    #[serde(default, rename = "maxConsignments", skip_serializing_if = "Option::is_none")]
    pub max_consignments: Option<usize>,
}

fn default_service_name() -> String {
    "go.micro.srv.consignment".to_string()
}

fn default_version() -> String {
    "latest".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:50051".to_string()
}

fn default_vessel_url() -> String {
    "http://127.0.0.1:50052".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            version: default_version(),
            listen_addr: default_listen_addr(),
            vessel_service: VesselServiceConfig::default(),
            fleet: Vec::new(),
            max_consignments: None,
        }
    }
}

/// Reads and writes the service configuration file.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.shippy/consignment-service.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_path = home.join(".shippy").join("consignment-service.json");

        Ok(Self { config_path })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Whether the configuration file exists.
    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<ServiceConfig> {
        if !self.config_path.exists() {
            return Ok(ServiceConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub async fn save(&self, config: &ServiceConfig) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            fs::create_dir_all(config_dir)
                .await
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(config)?;

        // Write atomically by writing to temp file then renaming
        let temp_path = self.config_path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to create temp config file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Config(format!("Failed to sync config: {}", e)))?;

        fs::rename(&temp_path, &self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to rename config file: {}", e)))?;

        Ok(())
    }
}
