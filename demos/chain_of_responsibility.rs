//! Chain of Responsibility
//!
//! This example demonstrates login requests passing through middleware.
//!
//! Key concepts:
//! - Each middleware may reject, settle, or pass the request on
//! - Throttling runs first and can stop the chain early
//! - Falling off the end of the chain means a regular login
//!
//! Run with: cargo run --example chain_of_responsibility

use patternbook::behavioral::chain::{Server, ThrottleConfig};

fn main() {
    patternbook::logging::init();
    println!("=== Chain of Responsibility ===\n");

    let mut server = Server::with_default_chain(ThrottleConfig {
        max_requests: 4,
        ..ThrottleConfig::default()
    });
    server.register("admin@example.com", "admin_pass", true);
    server.register("user@example.com", "user_pass", false);

    let attempts = [
        ("admin@example.com", "admin_pass"),
        ("user@example.com", "user_pass"),
        ("user@example.com", "wrong"),
        ("stranger@example.com", "whatever"),
        ("admin@example.com", "admin_pass"),
    ];

    for (email, password) in attempts {
        match server.log_in(email, password) {
            Ok(outcome) => println!("{:<22} -> logged in as {:?}", email, outcome),
            Err(e) => println!("{:<22} -> rejected: {}", email, e),
        }
    }

    println!("\n=== Example Complete ===");
}
