//! Vessel finder port (interface).

use crate::domain::{Specification, Vessel};
use crate::error::Result;

/// Port for querying the vessel-allocation service.
///
/// Implementations report "no vessel fits" as `Error::VesselUnavailable`
/// and any transport or protocol failure as `Error::RemoteCallFailed`.
pub trait VesselFinder: Send + Sync {
    /// Find a vessel able to carry a load described by `spec`.
    fn find_available(
        &self,
        spec: Specification,
    ) -> impl std::future::Future<Output = Result<Vessel>> + Send;
}
