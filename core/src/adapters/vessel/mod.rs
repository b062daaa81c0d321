//! Vessel finder adapters.
//!
//! The service either asks a remote vessel service over HTTP or answers
//! from a fleet listed in the configuration.

mod fleet;
mod http;

use std::time::Duration;

pub use fleet::FleetVesselFinder;
pub use http::HttpVesselFinder;

use crate::config::ServiceConfig;
use crate::domain::{Specification, Vessel};
use crate::error::Result;
use crate::ports::VesselFinder;

/// The vessel finder selected by configuration.
pub struct VesselClient {
    inner: Inner,
}

enum Inner {
    Remote(HttpVesselFinder),
    Fleet(FleetVesselFinder),
}

impl VesselClient {
    /// Client for a remote vessel service.
    pub fn remote(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            inner: Inner::Remote(HttpVesselFinder::new(base_url, timeout)?),
        })
    }

    /// Client answering from a fixed fleet.
    pub fn fleet(vessels: Vec<Vessel>) -> Self {
        Self {
            inner: Inner::Fleet(FleetVesselFinder::new(vessels)),
        }
    }

    /// Build the client described by `config`.
    ///
    /// A non-empty `fleet` takes precedence over the remote service.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        if config.fleet.is_empty() {
            Self::remote(
                &config.vessel_service.url,
                config.vessel_service.timeout(),
            )
        } else {
            Ok(Self::fleet(config.fleet.clone()))
        }
    }

    /// Short description of where lookups go, for logging.
    pub fn describe(&self) -> String {
        match &self.inner {
            Inner::Remote(finder) => format!("remote {}", finder.endpoint()),
            Inner::Fleet(finder) => format!("local fleet of {}", finder.vessels().len()),
        }
    }
}

impl VesselFinder for VesselClient {
    async fn find_available(&self, spec: Specification) -> Result<Vessel> {
        match &self.inner {
            Inner::Remote(finder) => finder.find_available(spec).await,
            Inner::Fleet(finder) => finder.find_available(spec).await,
        }
    }
}
