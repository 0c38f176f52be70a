//! Command Pattern
//!
//! This example demonstrates reversible editor commands sharing a clipboard.
//!
//! Key concepts:
//! - Commands capture a single action and a backup of the text
//! - The invoker keeps executed commands in order
//! - Undo reverts the most recent command only
//!
//! Run with: cargo run --example command

use patternbook::behavioral::command::{
    Clipboard, CopyCommand, CutCommand, Editor, Invoker, PasteCommand,
};

fn main() {
    patternbook::logging::init();
    println!("=== Command Pattern ===\n");

    let clipboard = Clipboard::shared();
    let mut invoker = Invoker::new(Editor::new("Hello World!"));
    println!("Initial text:   {:?}\n", invoker.editor().text());

    invoker.execute(Box::new(CutCommand::new(clipboard.clone())));
    println!(
        "After cut:      {:?} (clipboard {:?})",
        invoker.editor().text(),
        clipboard.borrow().content()
    );

    invoker.execute(Box::new(CopyCommand::new(clipboard.clone())));
    println!(
        "After copy:     {:?} (clipboard {:?})",
        invoker.editor().text(),
        clipboard.borrow().content()
    );

    invoker.execute(Box::new(PasteCommand::new(clipboard.clone())));
    println!("After paste:    {:?}", invoker.editor().text());

    println!("\nHistory: {:?}", invoker.history_names());

    invoker.undo();
    println!("After one undo: {:?}", invoker.editor().text());

    while invoker.undo() {}
    println!("After undo all: {:?}", invoker.editor().text());

    println!("\n=== Example Complete ===");
}
