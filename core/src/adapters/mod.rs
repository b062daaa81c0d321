//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with external systems.

pub mod store;
pub mod vessel;

// Re-export main types for convenience
pub use store::MemoryStore;
pub use vessel::{FleetVesselFinder, HttpVesselFinder, VesselClient};
