//! Vessel domain models.

use serde::{Deserialize, Serialize};

/// A transport vessel, owned by the vessel-allocation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vessel {
    pub id: String,
    pub name: String,
    pub max_weight: i32,
    pub capacity: i32,
}

impl Vessel {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        max_weight: i32,
        capacity: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_weight,
            capacity,
        }
    }

    /// Whether this vessel can carry a load described by `spec`.
    pub fn fits(&self, spec: &Specification) -> bool {
        self.capacity >= spec.capacity && self.max_weight >= spec.max_weight
    }
}

impl std::fmt::Display for Vessel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, max weight {}, capacity {})",
            self.name, self.id, self.max_weight, self.capacity
        )
    }
}

/// Query sent to the vessel service, derived from a consignment at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specification {
    pub max_weight: i32,
    pub capacity: i32,
}
