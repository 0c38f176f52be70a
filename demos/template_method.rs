//! Template Method
//!
//! This example demonstrates a fixed posting workflow with per-network steps.
//!
//! Key concepts:
//! - The trait's default method fixes the order of steps
//! - Implementations only provide the steps
//! - A failed log-in skips the rest of the workflow
//!
//! Run with: cargo run --example template_method

use patternbook::behavioral::template_method::{Credentials, Facebook, SocialNetwork, Twitter};

fn main() {
    patternbook::logging::init();
    println!("=== Template Method ===\n");

    let mut networks: Vec<Box<dyn SocialNetwork>> = vec![
        Box::new(Facebook::new(Credentials::new("alice", "secret"))),
        Box::new(Twitter::new(Credentials::new("alice", "secret"))),
        Box::new(Twitter::new(Credentials::new("mallory", ""))),
    ];

    for network in networks.iter_mut() {
        println!("{}:", network.network_name());
        for step in network.post("Design patterns are fun") {
            println!("  {}", step);
        }
    }

    println!("\n=== Example Complete ===");
}
