//! Saving and loading a caretaker's snapshot history.
//!
//! Checkpoints let a demo dump its undo history and pick it up again later.
//! JSON is human-readable; bincode is compact.

use super::error::CheckpointError;
use super::{Caretaker, Memento};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable copy of a caretaker's history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When the checkpoint was taken
    pub created_at: DateTime<Utc>,

    /// Snapshots, oldest first
    pub mementos: Vec<Memento>,
}

impl HistoryCheckpoint {
    /// Capture the caretaker's current history.
    pub fn capture(caretaker: &Caretaker) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            mementos: caretaker.history().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        debug!(id = %self.id, snapshots = self.mementos.len(), "checkpoint loaded");
        Ok(self)
    }

    /// Turn the checkpoint back into a working caretaker.
    pub fn into_caretaker(self) -> Caretaker {
        Caretaker::from_history(self.mementos)
    }
}

impl Caretaker {
    /// Rebuild a caretaker from a loaded checkpoint.
    pub fn from_checkpoint(checkpoint: HistoryCheckpoint) -> Self {
        checkpoint.into_caretaker()
    }
}
