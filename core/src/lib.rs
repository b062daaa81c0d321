//! Consignment Core Library
//!
//! Registers shipments ("consignments") against a transport vessel.
//! Provides functionality to:
//! - Find a vessel able to carry a consignment, via a pluggable finder
//! - Record vessel-assigned consignments in a concurrency-safe store
//! - List every recorded consignment in insertion order
//! - Load and save the service configuration
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure business logic and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{Consignment, Container, CreateResponse, ListResponse, Specification, Vessel};

// Re-export other commonly used types
pub use adapters::{FleetVesselFinder, HttpVesselFinder, MemoryStore, VesselClient};
pub use application::ConsignmentService;
pub use config::{ConfigStore, ServiceConfig, VesselServiceConfig};
pub use error::{Error, ErrorKind, Result};
pub use ports::{ConsignmentRepository, VesselFinder};
