//! Error types for the consignment-core library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for consignment operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while creating or listing consignments.
#[derive(Error, Debug)]
pub enum Error {
    /// The consignment was rejected before or during storage.
    #[error("Invalid consignment: {0}")]
    Invalid(String),

    /// The vessel service reported that no vessel fits the specification.
    #[error("No vessel available: {0}")]
    VesselUnavailable(String),

    /// The call to the vessel service failed at the transport or protocol level.
    #[error("Vessel service call failed: {0}")]
    RemoteCallFailed(String),

    /// Appending to the consignment store failed.
    #[error("Failed to store consignment: {0}")]
    StorageFailed(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Wire-level classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Invalid,
    VesselUnavailable,
    RemoteCallFailed,
    StorageFailed,
    Internal,
}

impl Error {
    /// Classify this error for callers of the service.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Invalid(_) => ErrorKind::Invalid,
            Error::VesselUnavailable(_) => ErrorKind::VesselUnavailable,
            Error::RemoteCallFailed(_) => ErrorKind::RemoteCallFailed,
            Error::StorageFailed(_) => ErrorKind::StorageFailed,
            Error::Json(_) | Error::Config(_) => ErrorKind::Internal,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Invalid => "invalid",
            ErrorKind::VesselUnavailable => "vessel unavailable",
            ErrorKind::RemoteCallFailed => "remote call failed",
            ErrorKind::StorageFailed => "storage failed",
            ErrorKind::Internal => "internal",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            Error::VesselUnavailable("none".into()).kind(),
            ErrorKind::VesselUnavailable
        );
        assert_eq!(
            Error::RemoteCallFailed("down".into()).kind(),
            ErrorKind::RemoteCallFailed
        );
        assert_eq!(Error::Config("bad".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_kind_wire_name() {
        let json = serde_json::to_string(&ErrorKind::VesselUnavailable).unwrap();
        assert_eq!(json, "\"vesselUnavailable\"");
    }
}
