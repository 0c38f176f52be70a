//! State Pattern
//!
//! This example demonstrates an audio player whose buttons depend on its state.
//!
//! Key concepts:
//! - A closed set of states declared with `state_enum!`
//! - The context holds exactly one current state
//! - Every state change is logged with a timestamp
//!
//! Run with: cargo run --example state

use patternbook::behavioral::state::{AudioPlayer, State};

fn main() {
    patternbook::logging::init();
    println!("=== State Pattern ===\n");

    let mut player = AudioPlayer::new();

    let presses: [(&str, fn(&mut AudioPlayer) -> String); 9] = [
        ("play", AudioPlayer::play),
        ("next", AudioPlayer::next),
        ("next", AudioPlayer::next),
        ("play", AudioPlayer::play),
        ("previous", AudioPlayer::previous),
        ("play", AudioPlayer::play),
        ("lock", AudioPlayer::lock),
        ("next", AudioPlayer::next),
        ("play", AudioPlayer::play),
    ];

    for (button, press) in presses {
        let before = player.state();
        let message = press(&mut player);
        println!(
            "[{:<7}] {:<8} -> {:<20} now {}",
            before.name(),
            button,
            message,
            player.state()
        );
    }

    let path = player.transitions().path();
    let names: Vec<&str> = path.iter().map(|s| s.name()).collect();
    println!("\nState path: {}", names.join(" -> "));

    println!("\n=== Example Complete ===");
}
