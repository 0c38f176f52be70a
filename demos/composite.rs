//! Composite Pattern
//!
//! This example demonstrates files and directories treated as one tree.
//!
//! Key concepts:
//! - Leaves and containers share one type
//! - Sizes and counts are computed recursively
//!
//! Run with: cargo run --example composite

use patternbook::structural::composite::Node;

fn main() {
    patternbook::logging::init();
    println!("=== Composite Pattern ===\n");

    let mut project = Node::dir(
        "project",
        vec![
            Node::file("Cargo.toml", 450),
            Node::dir(
                "src",
                vec![Node::file("lib.rs", 2_400), Node::file("main.rs", 800)],
            ),
        ],
    );
    if let Err(node) = project.add(Node::dir("docs", vec![Node::file("guide.md", 5_000)])) {
        println!("Could not add {}", node.name());
    }

    for line in project.render() {
        println!("{}", line);
    }

    println!("\nTotal size: {} B in {} files", project.size(), project.count_files());
    if let Some(src) = project.find("src") {
        println!("src/ alone: {} B", src.size());
    }

    println!("\n=== Example Complete ===");
}
