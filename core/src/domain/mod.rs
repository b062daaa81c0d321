//! Domain layer - Pure business logic and data models.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod consignment;
mod vessel;

// Re-export all domain types
pub use consignment::{Consignment, Container, CreateResponse, ListResponse};
pub use vessel::{Specification, Vessel};
