//! Observer pattern: a thermometer that notifies subscribers of changes.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Something that wants to hear about temperature changes.
pub trait TemperatureObserver {
    fn on_temperature(&mut self, celsius: f64);
}

/// Shared handles let the caller keep inspecting an observer after
/// subscribing it.
impl<T: TemperatureObserver> TemperatureObserver for Rc<RefCell<T>> {
    fn on_temperature(&mut self, celsius: f64) {
        self.borrow_mut().on_temperature(celsius);
    }
}

/// Token returned by [`Thermometer::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The subject.
pub struct Thermometer {
    celsius: f64,
    observers: Vec<(SubscriptionId, Box<dyn TemperatureObserver>)>,
    next_id: u64,
}

impl Thermometer {
    pub fn new(celsius: f64) -> Self {
        Self {
            celsius,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.celsius
    }

    pub fn subscribe(&mut self, observer: Box<dyn TemperatureObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Update the reading. Observers are only notified when it changes.
    pub fn set_temperature(&mut self, celsius: f64) {
        if celsius == self.celsius {
            return;
        }
        self.celsius = celsius;
        debug!(celsius, observers = self.observers.len(), "notifying observers");
        for (_, observer) in self.observers.iter_mut() {
            observer.on_temperature(celsius);
        }
    }
}

/// Keeps every reading it is shown.
#[derive(Debug, Default)]
pub struct Display {
    readings: Vec<f64>,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readings(&self) -> &[f64] {
        &self.readings
    }

    pub fn last(&self) -> Option<f64> {
        self.readings.last().copied()
    }
}

impl TemperatureObserver for Display {
    fn on_temperature(&mut self, celsius: f64) {
        self.readings.push(celsius);
    }
}

/// Raises an alarm for readings above a threshold.
#[derive(Debug)]
pub struct HeatAlarm {
    threshold: f64,
    alarms: Vec<String>,
}

impl HeatAlarm {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            alarms: Vec::new(),
        }
    }

    pub fn alarms(&self) -> &[String] {
        &self.alarms
    }
}

impl TemperatureObserver for HeatAlarm {
    fn on_temperature(&mut self, celsius: f64) {
        if celsius > self.threshold {
            self.alarms
                .push(format!("{:.1}°C exceeds {:.1}°C", celsius, self.threshold));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observers_receive_changes() {
        let display = Rc::new(RefCell::new(Display::new()));
        let mut thermometer = Thermometer::new(20.0);
        thermometer.subscribe(Box::new(display.clone()));

        thermometer.set_temperature(21.5);
        thermometer.set_temperature(23.0);

        assert_eq!(display.borrow().readings(), &[21.5, 23.0]);
        assert_eq!(display.borrow().last(), Some(23.0));
    }

    #[test]
    fn unchanged_reading_is_not_broadcast() {
        let display = Rc::new(RefCell::new(Display::new()));
        let mut thermometer = Thermometer::new(20.0);
        thermometer.subscribe(Box::new(display.clone()));

        thermometer.set_temperature(20.0);
        assert!(display.borrow().readings().is_empty());
    }

    #[test]
    fn alarm_fires_only_above_threshold() {
        let alarm = Rc::new(RefCell::new(HeatAlarm::new(30.0)));
        let mut thermometer = Thermometer::new(25.0);
        thermometer.subscribe(Box::new(alarm.clone()));

        thermometer.set_temperature(30.0);
        thermometer.set_temperature(31.0);

        assert_eq!(alarm.borrow().alarms(), ["31.0°C exceeds 30.0°C"]);
    }

    #[test]
    fn unsubscribed_observer_stops_receiving() {
        let display = Rc::new(RefCell::new(Display::new()));
        let mut thermometer = Thermometer::new(0.0);
        let id = thermometer.subscribe(Box::new(display.clone()));

        thermometer.set_temperature(1.0);
        assert!(thermometer.unsubscribe(id));
        assert!(!thermometer.unsubscribe(id));
        thermometer.set_temperature(2.0);

        assert_eq!(display.borrow().readings(), &[1.0]);
        assert_eq!(thermometer.observer_count(), 0);
    }
}
