//! Adapter pattern: fitting square pegs into round holes.
//!
//! [`RoundHole`] only understands [`RoundShape`]s. [`SquarePegAdapter`]
//! wraps a [`SquarePeg`] and reports the radius of the smallest circle
//! enclosing the square.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometryError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::Negative { field, value })
    }
}

/// Interface the client expects.
pub trait RoundShape {
    fn radius(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundHole {
    radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            radius: non_negative("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fits(&self, peg: &impl RoundShape) -> bool {
        let fits = peg.radius() <= self.radius;
        debug!(hole = self.radius, peg = peg.radius(), fits, "fit check");
        fits
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundPeg {
    radius: f64,
}

impl RoundPeg {
    pub fn new(radius: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            radius: non_negative("radius", radius)?,
        })
    }
}

impl RoundShape for RoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Incompatible service: knows only its side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePeg {
    width: f64,
}

impl SquarePeg {
    pub fn new(width: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            width: non_negative("width", width)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Makes a [`SquarePeg`] look like a [`RoundShape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePegAdapter {
    peg: SquarePeg,
}

impl SquarePegAdapter {
    pub fn new(peg: SquarePeg) -> Self {
        Self { peg }
    }
}

impl RoundShape for SquarePegAdapter {
    fn radius(&self) -> f64 {
        self.peg.width() * std::f64::consts::SQRT_2 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_peg_fits_equal_hole() {
        let hole = RoundHole::new(5.0).unwrap();
        assert!(hole.fits(&RoundPeg::new(5.0).unwrap()));
        assert!(!hole.fits(&RoundPeg::new(5.1).unwrap()));
    }

    #[test]
    fn adapter_reports_enclosing_radius() {
        let adapter = SquarePegAdapter::new(SquarePeg::new(2.0).unwrap());
        assert!((adapter.radius() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn square_pegs_fit_through_adapter() {
        let hole = RoundHole::new(5.0).unwrap();
        let small = SquarePegAdapter::new(SquarePeg::new(5.0).unwrap());
        let large = SquarePegAdapter::new(SquarePeg::new(10.0).unwrap());
        assert!(hole.fits(&small));
        assert!(!hole.fits(&large));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert_eq!(
            RoundHole::new(-1.0),
            Err(GeometryError::Negative {
                field: "radius",
                value: -1.0
            })
        );
        assert!(SquarePeg::new(-0.5).is_err());
        assert!(RoundPeg::new(-3.0).is_err());
    }
}
