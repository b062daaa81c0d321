//! Consignment domain models.

use serde::{Deserialize, Serialize};

use super::Specification;
use crate::error::{Error, Result};

// ============================================================================
// Container
// ============================================================================

/// A single container within a consignment.
///
/// The service only ever counts containers; the fields are carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub user_id: String,
}

impl Container {
    /// Create a container with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Consignment
// ============================================================================

/// A shipment record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Consignment {
    /// Caller-supplied reference. Not used as a key.
    #[serde(default)]
    pub id: String,
    /// Free-form description of the shipment.
    #[serde(default)]
    pub description: String,
    /// Total weight of the shipment. Missing on the wire means zero.
    #[serde(default)]
    pub weight: i32,
    /// Containers making up the shipment, in order.
    #[serde(default)]
    pub containers: Vec<Container>,
    /// Identifier of the assigned vessel; empty until assignment succeeds.
    #[serde(default)]
    pub vessel_id: String,
}

impl Consignment {
    /// Create an unassigned consignment.
    pub fn new(weight: i32, containers: Vec<Container>) -> Self {
        Self {
            weight,
            containers,
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the caller reference.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Check the fields the service relies on.
    pub fn validate(&self) -> Result<()> {
        if self.weight < 0 {
            return Err(Error::Invalid(format!(
                "weight must be non-negative, got {}",
                self.weight
            )));
        }
        Ok(())
    }

    /// The vessel query this consignment needs answered.
    pub fn specification(&self) -> Specification {
        Specification {
            max_weight: self.weight,
            capacity: i32::try_from(self.containers.len()).unwrap_or(i32::MAX),
        }
    }

    /// Whether a vessel has been assigned.
    pub fn is_assigned(&self) -> bool {
        !self.vessel_id.is_empty()
    }

    /// Produce a copy of this consignment assigned to `vessel_id`.
    ///
    /// The original value is left untouched.
    pub fn assigned_to(&self, vessel_id: impl Into<String>) -> Self {
        Self {
            vessel_id: vessel_id.into(),
            ..self.clone()
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Result of a successful `CreateConsignment` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    pub created: bool,
    pub consignment: Consignment,
}

/// Result of a `ListConsignments` call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListResponse {
    pub consignments: Vec<Consignment>,
}

// ============================================================================
// Tests
// ============================================================================
