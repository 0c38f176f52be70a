//! Prototype pattern: shapes copied from registered prototypes.
//!
//! Callers get new shapes by cloning a configured prototype instead of
//! knowing each concrete type's constructor.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt::Debug;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShapeError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Invalid shape: {} problems", .0.len())]
    Invalid(Vec<ShapeError>),

    #[error("No prototype registered under '{0}'")]
    UnknownPrototype(String),
}

fn non_negative(field: &'static str, value: f64) -> Validation<f64, NonEmptyVec<ShapeError>> {
    if value >= 0.0 {
        Validation::success(value)
    } else {
        Validation::fail(ShapeError::Negative { field, value })
    }
}

fn into_result<T>(validation: Validation<T, NonEmptyVec<ShapeError>>) -> Result<T, ShapeError> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => {
            let mut errors: Vec<ShapeError> = errors.iter().cloned().collect();
            Err(if errors.len() == 1 {
                errors.remove(0)
            } else {
                ShapeError::Invalid(errors)
            })
        }
    }
}

/// A cloneable shape.
pub trait Shape: Debug {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
    fn position(&self) -> (f64, f64);
    fn move_to(&mut self, x: f64, y: f64);

    /// Copy this shape behind a fresh box.
    fn clone_box(&self) -> Box<dyn Shape>;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    x: f64,
    y: f64,
    radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Result<Self, ShapeError> {
        let radius = into_result(non_negative("radius", radius))?;
        Ok(Self { x, y, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Both dimensions are checked; every negative one is reported.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ShapeError> {
        let checks = vec![non_negative("width", width), non_negative("height", height)];
        let dims = into_result(Validation::all_vec(checks))?;
        Ok(Self {
            x,
            y,
            width: dims[0],
            height: dims[1],
        })
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

/// Registry of named prototypes.
#[derive(Debug, Default)]
pub struct ShapeCache {
    prototypes: HashMap<String, Box<dyn Shape>>,
}

impl ShapeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, prototype: Box<dyn Shape>) {
        self.prototypes.insert(key.into(), prototype);
    }

    /// A fresh copy of the prototype under `key`.
    pub fn get(&self, key: &str) -> Result<Box<dyn Shape>, ShapeError> {
        let prototype = self
            .prototypes
            .get(key)
            .ok_or_else(|| ShapeError::UnknownPrototype(key.to_string()))?;
        debug!(key, shape = prototype.name(), "prototype cloned");
        Ok(prototype.clone_box())
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
