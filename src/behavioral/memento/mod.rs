//! Memento pattern: snapshot-based undo.
//!
//! An [`Originator`] hands out immutable [`Memento`] snapshots of its state
//! without exposing how that state is stored. A [`Caretaker`] keeps the
//! snapshots in order and decides when to roll the originator back.
//!
//! # Example
//!
//! ```rust
//! use patternbook::behavioral::memento::{Caretaker, Originator};
//!
//! let mut originator = Originator::new("draft");
//! let mut caretaker = Caretaker::new();
//!
//! caretaker.backup(&originator);
//! originator.set_state("revised");
//! caretaker.backup(&originator);
//! originator.set_state("final");
//! caretaker.backup(&originator);
//!
//! caretaker.undo(&mut originator).unwrap();
//! caretaker.undo(&mut originator).unwrap();
//! assert_eq!(originator.state(), "draft");
//! ```

mod caretaker;
pub mod checkpoint;
pub mod error;

pub use caretaker::Caretaker;
pub use checkpoint::{HistoryCheckpoint, CHECKPOINT_VERSION};
pub use error::{CaretakerError, CheckpointError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Immutable snapshot of an [`Originator`]'s state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Memento {
    id: Uuid,
    state: String,
    saved_at: DateTime<Utc>,
}

impl Memento {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }
}

/// Object whose state is snapshotted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
        debug!(state = %self.state, "originator state changed");
    }

    /// Capture the current state.
    pub fn save(&self) -> Memento {
        Memento {
            id: Uuid::new_v4(),
            state: self.state.clone(),
            saved_at: Utc::now(),
        }
    }

    /// Roll back to a previously captured state.
    pub fn restore(&mut self, memento: &Memento) {
        self.state = memento.state.clone();
        debug!(state = %self.state, memento = %memento.id, "originator restored");
    }
}
