//! Strategy Pattern
//!
//! This example demonstrates swapping a calculator's operation at runtime.
//!
//! Key concepts:
//! - Strategies share one trait
//! - The context delegates to whichever strategy is set
//! - Executing without a strategy is an error
//!
//! Run with: cargo run --example strategy

use patternbook::behavioral::strategy::{Add, Calculator, Multiply, Strategy, Subtract};

fn main() {
    patternbook::logging::init();
    println!("=== Strategy Pattern ===\n");

    let mut calculator = Calculator::new();
    match calculator.execute(6, 3) {
        Ok(value) => println!("Unexpected result {}", value),
        Err(e) => println!("Without a strategy: {}", e),
    }

    let strategies: Vec<Box<dyn Strategy>> =
        vec![Box::new(Add), Box::new(Subtract), Box::new(Multiply)];
    for strategy in strategies {
        calculator.set_strategy(strategy);
        if let (Some(name), Ok(value)) = (calculator.strategy_name(), calculator.execute(6, 3)) {
            println!("{:<9} 6, 3 = {}", name, value);
        }
    }

    println!("\n=== Example Complete ===");
}
