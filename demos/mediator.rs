//! Mediator Pattern
//!
//! This example demonstrates a chat room routing messages between members.
//!
//! Key concepts:
//! - Participants never reference each other
//! - The room decides who receives each message
//! - Unknown participants are reported as errors
//!
//! Run with: cargo run --example mediator

use patternbook::behavioral::mediator::ChatRoom;

fn main() {
    patternbook::logging::init();
    println!("=== Mediator Pattern ===\n");

    let mut room = ChatRoom::new();
    let alice = room.join("Alice");
    let bob = room.join("Bob");
    let carol = room.join("Carol");

    let steps = [
        room.send(alice, "Hi everyone!").map(|n| format!("Alice broadcast to {} people", n)),
        room.send(bob, "Hey Alice").map(|n| format!("Bob broadcast to {} people", n)),
        room.send_to(carol, alice, "Lunch later?")
            .map(|_| "Carol messaged Alice privately".to_string()),
    ];
    for step in steps {
        match step {
            Ok(line) => println!("{}", line),
            Err(e) => println!("Error: {}", e),
        }
    }

    if let Ok(left) = room.leave(bob) {
        println!("{} left the room", left.name());
    }
    if let Err(e) = room.send(bob, "Anyone there?") {
        println!("Bob tried to send after leaving: {}", e);
    }

    println!("\nInboxes:");
    for id in [alice, carol] {
        if let Some(participant) = room.participant(id) {
            println!("  {}:", participant.name());
            for line in participant.inbox() {
                println!("    {}", line);
            }
        }
    }

    println!("\n=== Example Complete ===");
}
