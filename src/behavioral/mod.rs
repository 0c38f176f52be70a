//! Behavioral patterns: how objects share work and react to change.
//!
//! - **command**: reversible editor actions with an undo history
//! - **memento**: snapshot-based undo with a caretaker
//! - **mediator**: chat room routing messages between participants
//! - **chain**: login middleware handing a request down a chain
//! - **observer**: thermometer notifying displays and alarms
//! - **state**: audio player whose buttons depend on its state
//! - **template_method**: social network posting skeleton
//! - **strategy**: calculator with swappable operations

pub mod chain;
pub mod command;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
