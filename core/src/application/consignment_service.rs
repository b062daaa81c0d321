//! Consignment application service.

use std::time::Duration;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::domain::{Consignment, CreateResponse, ListResponse, Vessel};
use crate::error::{Error, Result};
use crate::ports::{ConsignmentRepository, VesselFinder};

/// Application service for creating and listing consignments.
///
/// Creation assigns a vessel through the injected `VesselFinder` and only
/// then appends to the repository. If the lookup fails, is cancelled or
/// times out, the repository is never touched.
pub struct ConsignmentService<F: VesselFinder, R: ConsignmentRepository> {
    finder: F,
    repository: R,
    lookup_timeout: Option<Duration>,
}

impl<F: VesselFinder, R: ConsignmentRepository> ConsignmentService<F, R> {
    /// Create a new service over the given finder and repository.
    pub fn new(finder: F, repository: R) -> Self {
        Self {
            finder,
            repository,
            lookup_timeout: None,
        }
    }

    /// Bound every vessel lookup by `lookup_timeout`.
    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = Some(lookup_timeout);
        self
    }

    /// The vessel finder this service queries.
    pub fn finder(&self) -> &F {
        &self.finder
    }

    /// The repository this service appends to.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Assign a vessel to `consignment` and store it.
    ///
    /// The caller's value is not modified; the stored, vessel-assigned copy is
    /// returned in the response.
    pub async fn create_consignment(&self, consignment: &Consignment) -> Result<CreateResponse> {
        consignment.validate()?;

        let vessel = self.find_vessel(consignment).await?;
        info!(vessel = %vessel.name, vessel_id = %vessel.id, "found vessel");

        let stored = self
            .repository
            .add(consignment.assigned_to(vessel.id))
            .map_err(|e| {
                warn!(error = %e, "failed to store consignment");
                Error::StorageFailed(e.to_string())
            })?;

        Ok(CreateResponse {
            created: true,
            consignment: stored,
        })
    }

    /// Every consignment created so far, in insertion order.
    pub fn list_consignments(&self) -> ListResponse {
        ListResponse {
            consignments: self.repository.list_all(),
        }
    }

    async fn find_vessel(&self, consignment: &Consignment) -> Result<Vessel> {
        let spec = consignment.specification();

        let result = match self.lookup_timeout {
            Some(limit) => match timeout(limit, self.finder.find_available(spec)).await {
                Ok(result) => result,
                Err(_) => Err(Error::RemoteCallFailed(format!(
                    "vessel lookup timed out after {:?}",
                    limit
                ))),
            },
            None => self.finder.find_available(spec).await,
        };

        result.map_err(|e| {
            warn!(
                error = %e,
                max_weight = spec.max_weight,
                capacity = spec.capacity,
                "vessel lookup failed"
            );
            match e {
                e @ (Error::VesselUnavailable(_) | Error::RemoteCallFailed(_)) => e,
                other => Error::RemoteCallFailed(other.to_string()),
            }
        })
    }
}
