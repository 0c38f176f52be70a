//! Observer Pattern
//!
//! This example demonstrates a thermometer notifying its subscribers.
//!
//! Key concepts:
//! - Observers subscribe and unsubscribe at runtime
//! - Only actual changes are broadcast
//! - Shared handles let the caller inspect observers afterwards
//!
//! Run with: cargo run --example observer

use patternbook::behavioral::observer::{Display, HeatAlarm, Thermometer};
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    patternbook::logging::init();
    println!("=== Observer Pattern ===\n");

    let display = Rc::new(RefCell::new(Display::new()));
    let alarm = Rc::new(RefCell::new(HeatAlarm::new(30.0)));

    let mut thermometer = Thermometer::new(20.0);
    let display_id = thermometer.subscribe(Box::new(display.clone()));
    thermometer.subscribe(Box::new(alarm.clone()));
    println!("{} observers subscribed", thermometer.observer_count());

    for reading in [22.5, 22.5, 31.0, 28.0] {
        thermometer.set_temperature(reading);
        println!("Thermometer set to {:.1}°C", reading);
    }

    thermometer.unsubscribe(display_id);
    thermometer.set_temperature(35.0);
    println!("Display unsubscribed, thermometer set to 35.0°C");

    println!("\nDisplay readings: {:?}", display.borrow().readings());
    println!("Alarms:");
    for alarm in alarm.borrow().alarms() {
        println!("  {}", alarm);
    }

    println!("\n=== Example Complete ===");
}
