//! Ordered snapshot history.

use super::error::CaretakerError;
use super::{Memento, Originator};
use tracing::{debug, warn};

/// Holder of an ordered history of mementos.
///
/// `undo` discards the most recent snapshot and then restores the snapshot
/// that is now last. A single undo therefore re-applies a state that was
/// recorded before the discarded one: after backing up `A`, `B`, `C`, the
/// first undo lands on `B` and the second on `A`.
#[derive(Clone, Debug, Default)]
pub struct Caretaker {
    history: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a caretaker from previously saved snapshots.
    pub fn from_history(history: Vec<Memento>) -> Self {
        Self { history }
    }

    /// Append a snapshot of the originator's current state.
    pub fn backup(&mut self, originator: &Originator) {
        let memento = originator.save();
        debug!(state = memento.state(), depth = self.history.len() + 1, "backup recorded");
        self.history.push(memento);
    }

    /// Drop the newest snapshot and restore the one before it.
    pub fn undo(&mut self, originator: &mut Originator) -> Result<&Memento, CaretakerError> {
        let discarded = self.history.pop().ok_or(CaretakerError::Empty)?;
        debug!(discarded = discarded.state(), "snapshot discarded");

        let Some(previous) = self.history.last() else {
            warn!("undo reached the start of history");
            return Err(CaretakerError::NothingToRestore {
                discarded: discarded.id(),
            });
        };

        originator.restore(previous);
        Ok(previous)
    }

    pub fn history(&self) -> &[Memento] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Printable listing, oldest first. Snapshot times are left out so the
    /// listing only depends on the recorded states.
    pub fn show_history(&self) -> Vec<String> {
        self.history
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{}. {}", i + 1, m.state()))
            .collect()
    }
}
