//! Memento Pattern
//!
//! This example demonstrates snapshot-based undo with a caretaker.
//!
//! Key concepts:
//! - The originator produces opaque snapshots of its state
//! - The caretaker keeps them in order
//! - Undo drops the newest snapshot and restores the one before it
//! - Histories can be checkpointed to JSON and loaded back
//!
//! Run with: cargo run --example memento

use patternbook::behavioral::memento::{Caretaker, CaretakerError, HistoryCheckpoint, Originator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    patternbook::logging::init();
    println!("=== Memento Pattern ===\n");

    let mut originator = Originator::new("State #1");
    let mut caretaker = Caretaker::new();

    caretaker.backup(&originator);
    originator.set_state("State #2");
    caretaker.backup(&originator);
    originator.set_state("State #3");
    caretaker.backup(&originator);

    println!("Current state: {}", originator.state());
    println!("History:");
    for line in caretaker.show_history() {
        println!("  {}", line);
    }

    let checkpoint = HistoryCheckpoint::capture(&caretaker);
    let json = checkpoint.to_json()?;
    println!("\nCheckpoint written as JSON ({} snapshots)", checkpoint.mementos.len());

    println!("\nUndo:");
    caretaker.undo(&mut originator)?;
    println!("  -> {}", originator.state());
    caretaker.undo(&mut originator)?;
    println!("  -> {}", originator.state());
    match caretaker.undo(&mut originator) {
        Err(CaretakerError::NothingToRestore { .. }) => println!(
            "  -> last snapshot discarded, nothing earlier to restore (state stays {})",
            originator.state()
        ),
        Err(CaretakerError::Empty) => println!("  -> history is empty"),
        Ok(_) => println!("  -> {}", originator.state()),
    }

    let mut restored = HistoryCheckpoint::from_json(&json)?.into_caretaker();
    println!("\nReloaded checkpoint with {} snapshots", restored.len());
    restored.undo(&mut originator)?;
    println!("Undo on reloaded history -> {}", originator.state());

    println!("\nNote: one undo re-applies the snapshot recorded before the discarded one,");
    println!("so three backups and two undos land two steps back.");

    println!("\n=== Example Complete ===");
    Ok(())
}
