//! In-process vessel fleet.

use crate::domain::{Specification, Vessel};
use crate::error::{Error, Result};
use crate::ports::VesselFinder;

/// Answers lookups from a fixed list of vessels.
///
/// Used when the service is configured with a local fleet instead of a
/// remote vessel service.
pub struct FleetVesselFinder {
    vessels: Vec<Vessel>,
}

impl FleetVesselFinder {
    pub fn new(vessels: Vec<Vessel>) -> Self {
        Self { vessels }
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }
}

impl VesselFinder for FleetVesselFinder {
    async fn find_available(&self, spec: Specification) -> Result<Vessel> {
        // First fit, in fleet order
        self.vessels
            .iter()
            .find(|v| v.fits(&spec))
            .cloned()
            .ok_or_else(|| {
                Error::VesselUnavailable(format!(
                    "no vessel for max weight {} and capacity {}",
                    spec.max_weight, spec.capacity
                ))
            })
    }
}
