//! Consignment repository port (interface).

use crate::domain::Consignment;
use crate::error::Result;

/// Port for consignment storage.
///
/// Implementations must make `add` atomic with respect to every other
/// `add` and `list_all`: a reader never sees a half-appended entry and
/// concurrent appends never lose each other.
pub trait ConsignmentRepository: Send + Sync {
    /// Append a consignment and return the stored value.
    fn add(&self, consignment: Consignment) -> Result<Consignment>;

    /// Snapshot of every stored consignment, in insertion order.
    fn list_all(&self) -> Vec<Consignment>;
}
