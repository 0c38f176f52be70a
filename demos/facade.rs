//! Facade Pattern
//!
//! This example demonstrates booting a computer through one call.
//!
//! Key concepts:
//! - Subsystems keep their low-level interfaces
//! - The facade knows the order to drive them in
//!
//! Run with: cargo run --example facade

use patternbook::structural::facade::ComputerFacade;

fn main() {
    patternbook::logging::init();
    println!("=== Facade Pattern ===\n");

    let mut computer = ComputerFacade::new();
    println!("Running: {}\n", computer.is_running());

    for line in computer.start() {
        println!("  {}", line);
    }

    println!("\nRunning: {}", computer.is_running());
    println!("\n=== Example Complete ===");
}
