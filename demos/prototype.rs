//! Prototype Pattern
//!
//! This example demonstrates cloning configured shapes from a registry.
//!
//! Key concepts:
//! - Shapes copy themselves behind a trait object
//! - Clones are independent of their prototype
//! - Constructors reject negative dimensions
//!
//! Run with: cargo run --example prototype

use patternbook::creational::prototype::{Circle, Rectangle, ShapeCache, ShapeError};

fn main() -> Result<(), ShapeError> {
    patternbook::logging::init();
    println!("=== Prototype Pattern ===\n");

    let mut cache = ShapeCache::new();
    cache.register("big circle", Box::new(Circle::new(0.0, 0.0, 10.0)?));
    cache.register("square", Box::new(Rectangle::new(0.0, 0.0, 5.0, 5.0)?));
    println!("Registered prototypes: {:?}\n", cache.keys());

    let mut copy = cache.get("big circle")?;
    copy.move_to(15.0, 20.0);
    let original = cache.get("big circle")?;
    println!("Clone moved to      {:?}", copy.position());
    println!("Prototype still at  {:?}", original.position());
    println!("Same area:          {:.2} == {:.2}", copy.area(), original.area());

    let square = cache.get("square")?;
    println!("\nA {} with area {:.1}", square.name(), square.area());

    println!("\nRejected shapes:");
    if let Err(e) = Circle::new(0.0, 0.0, -1.0) {
        println!("  - {}", e);
    }
    if let Err(ShapeError::Invalid(errors)) = Rectangle::new(0.0, 0.0, -1.0, -2.0) {
        for error in errors {
            println!("  - {}", error);
        }
    }
    if let Err(e) = cache.get("triangle") {
        println!("  - {}", e);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
