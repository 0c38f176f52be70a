//! Patternbook: a catalogue of classic design patterns in Rust
//!
//! Each pattern lives in its own module with a tiny domain model and a
//! runnable console demo under `demos/`. The modules are independent of one
//! another; nothing here composes them into a larger architecture.
//!
//! # Families
//!
//! - **Creational**: factory method, prototype, builder
//! - **Structural**: facade, proxy, adapter, bridge, flyweight, decorator, composite
//! - **Behavioral**: command, memento, mediator, chain of responsibility,
//!   observer, state, template method, strategy
//!
//! # Example
//!
//! ```rust
//! use patternbook::behavioral::command::{CopyCommand, CutCommand, Editor, Invoker, PasteCommand};
//! use patternbook::behavioral::command::Clipboard;
//!
//! let clipboard = Clipboard::shared();
//! let mut invoker = Invoker::new(Editor::new("Hello World!"));
//!
//! invoker.execute(Box::new(CutCommand::new(clipboard.clone())));
//! invoker.execute(Box::new(CopyCommand::new(clipboard.clone())));
//! invoker.execute(Box::new(PasteCommand::new(clipboard.clone())));
//! assert_eq!(invoker.editor().text(), "Hello WorldHello World");
//!
//! invoker.undo();
//! assert_eq!(invoker.editor().text(), "Hello World");
//! ```

pub mod behavioral;
pub mod creational;
pub mod logging;
pub mod structural;

// Re-export the undo cluster
pub use behavioral::command::{Command, Invoker};
pub use behavioral::memento::{Caretaker, Memento, Originator};
pub use behavioral::state::{AudioPlayer, PlayerState, State};
