//! Factory Method
//!
//! This example demonstrates logistics companies creating their own transport.
//!
//! Key concepts:
//! - The creator's planning logic is shared
//! - Each creator overrides only the factory method
//! - Unknown keys are rejected with an error
//!
//! Run with: cargo run --example factory_method

use patternbook::creational::factory_method::{
    create_transport_by_key, Logistics, RoadLogistics, SeaLogistics,
};

fn main() {
    patternbook::logging::init();
    println!("=== Factory Method ===\n");

    let companies: Vec<(&str, Box<dyn Logistics>)> = vec![
        ("Road", Box::new(RoadLogistics)),
        ("Sea", Box::new(SeaLogistics)),
    ];
    for (name, company) in &companies {
        println!("{:<5} logistics: {}", name, company.plan_delivery("furniture"));
    }

    println!("\nBy key:");
    for key in ["truck", "plane", "teleporter"] {
        match create_transport_by_key(key) {
            Ok(transport) => println!("  {:<10} -> {}", key, transport.deliver("mail")),
            Err(e) => println!("  {:<10} -> error: {}", key, e),
        }
    }

    println!("\n=== Example Complete ===");
}
