//! Flyweight Pattern
//!
//! This example demonstrates a forest sharing tree types between trees.
//!
//! Key concepts:
//! - Heavy, repeated data lives in shared tree types
//! - Each tree stores only its coordinates
//!
//! Run with: cargo run --example flyweight

use patternbook::structural::flyweight::Forest;

fn main() {
    patternbook::logging::init();
    println!("=== Flyweight Pattern ===\n");

    let mut forest = Forest::new();
    let kinds = [
        ("Oak", "green", "rough bark"),
        ("Birch", "white", "smooth bark"),
        ("Pine", "dark green", "needles"),
    ];

    for i in 0..1_000 {
        let (name, color, texture) = kinds[i % kinds.len()];
        let i = i as i32;
        forest.plant(i % 50, i / 50, name, color, texture);
    }

    println!("Trees planted: {}", forest.tree_count());
    println!("Tree types:    {}", forest.type_count());
    println!("\nFirst few trees:");
    for line in forest.draw().into_iter().take(4) {
        println!("  {}", line);
    }

    println!("\n=== Example Complete ===");
}
