//! Builder Pattern
//!
//! This example demonstrates assembling hamburgers step by step.
//!
//! Key concepts:
//! - Fluent builder collecting optional parts
//! - Validation that reports every problem at once
//! - A director (the chef) with preset recipes
//!
//! Run with: cargo run --example builder

use patternbook::creational::builder::{
    BuildError, Bun, Cheese, Chef, HamburgerBuilder, Patty, Sauce, Topping,
};

fn main() -> Result<(), BuildError> {
    patternbook::logging::init();
    println!("=== Builder Pattern ===\n");

    println!("Menu:");
    for (name, burger) in Chef::menu()? {
        println!("  {:<13} {}", name, burger);
    }

    let custom = HamburgerBuilder::new()
        .bun(Bun::Brioche)
        .patty(Patty::Chicken)
        .cheese(Cheese::Swiss)
        .topping(Topping::Tomato)
        .sauce(Sauce::Mayo)
        .build()?;
    println!("\nCustom order: {}", custom);

    println!("\nInvalid orders:");
    match HamburgerBuilder::new().topping(Topping::Onion).build() {
        Err(BuildError::Invalid(errors)) => {
            for error in errors {
                println!("  - {}", error);
            }
        }
        Err(e) => println!("  - {}", e),
        Ok(burger) => println!("  unexpectedly built {}", burger),
    }
    if let Err(e) = HamburgerBuilder::new()
        .bun(Bun::Plain)
        .patty(Patty::Beef)
        .patty(Patty::Beef)
        .patty(Patty::Beef)
        .patty(Patty::Beef)
        .patty(Patty::Beef)
        .build()
    {
        println!("  - {}", e);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
