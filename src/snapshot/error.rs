//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur capturing or restoring a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot data failed validation against the plan
    #[error("snapshot validation failed: {0}")]
    ValidationFailed(String),
}
