//! Bridge Pattern
//!
//! This example demonstrates remotes and devices varying independently.
//!
//! Key concepts:
//! - Any remote works with any device
//! - Extended remotes add features without touching devices
//!
//! Run with: cargo run --example bridge

use patternbook::structural::bridge::{AdvancedRemote, Device, Radio, RemoteControl, Tv};

fn main() {
    patternbook::logging::init();
    println!("=== Bridge Pattern ===\n");

    let mut basic = RemoteControl::new(Tv::default());
    basic.toggle_power();
    basic.volume_up();
    basic.channel_up();
    println!("Basic remote:    {}", basic.device().status());

    let mut advanced = AdvancedRemote::new(Radio::default());
    advanced.remote().toggle_power();
    advanced.remote().volume_up();
    println!("Advanced remote: {}", advanced.device().status());
    advanced.mute();
    println!("After mute:      {}", advanced.device().status());

    println!("\n=== Example Complete ===");
}
