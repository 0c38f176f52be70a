//! Decorator Pattern
//!
//! This example demonstrates coffee with stackable extras.
//!
//! Key concepts:
//! - Decorators wrap any coffee, including other decorators
//! - Both static nesting and boxed trait objects work
//!
//! Run with: cargo run --example decorator

use patternbook::structural::decorator::{Coffee, Milk, SimpleCoffee, Sugar, WhippedCream};

fn print_order(coffee: &dyn Coffee) {
    println!("  {:<40} ${}.{:02}", coffee.description(), coffee.cost() / 100, coffee.cost() % 100);
}

fn main() {
    patternbook::logging::init();
    println!("=== Decorator Pattern ===\n");

    print_order(&SimpleCoffee);
    print_order(&Milk::new(SimpleCoffee));
    print_order(&WhippedCream::new(Sugar::new(Milk::new(SimpleCoffee))));

    let mut order: Box<dyn Coffee> = Box::new(SimpleCoffee);
    for _ in 0..2 {
        order = Box::new(Sugar::new(order));
    }
    print_order(order.as_ref());

    println!("\n=== Example Complete ===");
}
