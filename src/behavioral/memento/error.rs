//! Memento error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors returned by [`Caretaker::undo`](super::Caretaker::undo).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CaretakerError {
    /// No snapshot has been recorded yet
    #[error("History is empty, nothing to undo")]
    Empty,

    /// The last snapshot was discarded and none remains to restore
    #[error("Discarded snapshot {discarded} but no earlier snapshot remains")]
    NothingToRestore { discarded: Uuid },
}

/// Errors that can occur while saving or loading a history checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
