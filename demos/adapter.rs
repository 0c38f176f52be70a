//! Adapter Pattern
//!
//! This example demonstrates fitting square pegs into round holes.
//!
//! Key concepts:
//! - The hole only understands round shapes
//! - The adapter translates a square's width into a radius
//! - Dimensions must be non-negative
//!
//! Run with: cargo run --example adapter

use patternbook::structural::adapter::{
    GeometryError, RoundHole, RoundPeg, RoundShape, SquarePeg, SquarePegAdapter,
};

fn main() -> Result<(), GeometryError> {
    patternbook::logging::init();
    println!("=== Adapter Pattern ===\n");

    let hole = RoundHole::new(5.0)?;
    let round = RoundPeg::new(5.0)?;
    println!("Round peg r=5 fits hole r=5: {}", hole.fits(&round));

    for width in [5.0, 10.0] {
        let adapter = SquarePegAdapter::new(SquarePeg::new(width)?);
        println!(
            "Square peg w={} (as r={:.2}) fits: {}",
            width,
            adapter.radius(),
            hole.fits(&adapter)
        );
    }

    match SquarePeg::new(-2.0) {
        Ok(_) => println!("Negative peg accepted?"),
        Err(e) => println!("\nRejected: {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
