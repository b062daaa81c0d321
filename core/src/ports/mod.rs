//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the application layer uses
//! to interact with external systems. Implementations live in `adapters`.

mod repository;
mod vessel_finder;

pub use repository::ConsignmentRepository;
pub use vessel_finder::VesselFinder;
