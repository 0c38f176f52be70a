//! Mediator pattern: a chat room that routes every message.
//!
//! Participants never hold references to one another. They only know their
//! own [`ParticipantId`]; the [`ChatRoom`] owns them and decides who
//! receives what.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MediatorError {
    #[error("Unknown participant {0}")]
    UnknownParticipant(ParticipantId),

    #[error("Participant {0} cannot message themselves")]
    SelfMessage(ParticipantId),
}

/// Handle issued by [`ChatRoom::join`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(usize);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Chat member with a private inbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    name: String,
    inbox: Vec<String>,
}

impl Participant {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

/// The mediator.
#[derive(Debug, Default)]
pub struct ChatRoom {
    participants: BTreeMap<ParticipantId, Participant>,
    next_id: usize,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&mut self, name: impl Into<String>) -> ParticipantId {
        let id = ParticipantId(self.next_id);
        self.next_id += 1;
        let name = name.into();
        debug!(%id, name = %name, "participant joined");
        self.participants.insert(
            id,
            Participant {
                name,
                inbox: Vec::new(),
            },
        );
        id
    }

    /// Remove a participant. Their inbox goes with them.
    pub fn leave(&mut self, id: ParticipantId) -> Result<Participant, MediatorError> {
        self.participants
            .remove(&id)
            .ok_or(MediatorError::UnknownParticipant(id))
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Broadcast to everyone except the sender. Returns how many received it.
    pub fn send(&mut self, from: ParticipantId, text: &str) -> Result<usize, MediatorError> {
        let line = format!("{}: {}", self.name_of(from)?, text);
        let mut delivered = 0;
        for (id, participant) in self.participants.iter_mut() {
            if *id != from {
                participant.inbox.push(line.clone());
                delivered += 1;
            }
        }
        debug!(%from, delivered, "broadcast delivered");
        Ok(delivered)
    }

    /// Deliver to a single participant.
    pub fn send_to(
        &mut self,
        from: ParticipantId,
        to: ParticipantId,
        text: &str,
    ) -> Result<(), MediatorError> {
        if from == to {
            return Err(MediatorError::SelfMessage(from));
        }
        let line = format!("{} (private): {}", self.name_of(from)?, text);
        let recipient = self
            .participants
            .get_mut(&to)
            .ok_or(MediatorError::UnknownParticipant(to))?;
        recipient.inbox.push(line);
        debug!(%from, %to, "private message delivered");
        Ok(())
    }

    fn name_of(&self, id: ParticipantId) -> Result<String, MediatorError> {
        self.participants
            .get(&id)
            .map(|p| p.name.clone())
            .ok_or(MediatorError::UnknownParticipant(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_skips_sender() {
        let mut room = ChatRoom::new();
        let alice = room.join("Alice");
        let bob = room.join("Bob");
        let carol = room.join("Carol");

        assert_eq!(room.send(alice, "hi all").unwrap(), 2);
        assert!(room.participant(alice).unwrap().inbox().is_empty());
        assert_eq!(room.participant(bob).unwrap().inbox(), ["Alice: hi all"]);
        assert_eq!(room.participant(carol).unwrap().inbox(), ["Alice: hi all"]);
    }

    #[test]
    fn private_message_reaches_only_recipient() {
        let mut room = ChatRoom::new();
        let alice = room.join("Alice");
        let bob = room.join("Bob");
        let carol = room.join("Carol");

        room.send_to(bob, alice, "psst").unwrap();
        assert_eq!(room.participant(alice).unwrap().inbox(), ["Bob (private): psst"]);
        assert!(room.participant(carol).unwrap().inbox().is_empty());
    }

    #[test]
    fn unknown_sender_is_rejected() {
        let mut room = ChatRoom::new();
        let alice = room.join("Alice");
        room.leave(alice).unwrap();

        assert_eq!(
            room.send(alice, "ghost"),
            Err(MediatorError::UnknownParticipant(alice))
        );
    }

    #[test]
    fn unknown_recipient_is_rejected() {
        let mut room = ChatRoom::new();
        let alice = room.join("Alice");
        let bob = room.join("Bob");
        room.leave(bob).unwrap();

        assert_eq!(
            room.send_to(alice, bob, "hello?"),
            Err(MediatorError::UnknownParticipant(bob))
        );
    }

    #[test]
    fn messaging_yourself_is_rejected() {
        let mut room = ChatRoom::new();
        let alice = room.join("Alice");
        assert_eq!(
            room.send_to(alice, alice, "echo"),
            Err(MediatorError::SelfMessage(alice))
        );
    }

    #[test]
    fn ids_are_not_reused_after_leave() {
        let mut room = ChatRoom::new();
        let first = room.join("First");
        room.leave(first).unwrap();
        let second = room.join("Second");
        assert_ne!(first, second);
        assert_eq!(room.len(), 1);
    }
}
