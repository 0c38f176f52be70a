//! Proxy Pattern
//!
//! This example demonstrates a PIN-protected bank account.
//!
//! Key concepts:
//! - The proxy and the real account share one trait
//! - Access is checked before delegating
//! - Every attempt ends up in an audit log
//!
//! Run with: cargo run --example proxy

use patternbook::structural::proxy::{Account, BankAccount, ProtectedAccount};

fn main() {
    patternbook::logging::init();
    println!("=== Proxy Pattern ===\n");

    // Amounts in cents
    let mut account = ProtectedAccount::new(Account::new("Alice", 10_000), "4321");

    println!("Withdraw before unlocking: {:?}", account.withdraw(2_000));
    println!("Unlock with 1111: {}", account.unlock("1111"));
    println!("Unlock with 4321: {}", account.unlock("4321"));
    println!("Deposit 50.00:   {:?}", account.deposit(5_000));
    println!("Withdraw 500.00: {:?}", account.withdraw(50_000));
    println!("Withdraw 30.00:  {:?}", account.withdraw(3_000));
    println!("Balance:         {:?}", account.balance());
    account.lock();
    println!("Balance after lock: {:?}", account.balance());

    println!("\nAudit log:");
    for entry in account.audit_log() {
        println!("  {}", entry);
    }

    println!("\n=== Example Complete ===");
}
