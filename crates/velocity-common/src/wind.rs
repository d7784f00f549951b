//! Wind vector samples.

use serde::{Deserialize, Serialize};

/// A wind sample as eastward (u) and northward (v) speed components.
///
/// Components are in whatever unit the source grid carries (typically m/s);
/// the engine never converts units, it only rotates and scales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindVector {
    pub u: f64,
    pub v: f64,
}

impl WindVector {
    /// Create a vector from components.
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Magnitude in component units.
    pub fn speed(&self) -> f64 {
        self.u.hypot(self.v)
    }

    /// Bearing the wind blows toward, degrees clockwise from north in
    /// [0, 360).
    pub fn direction_to(&self) -> f64 {
        self.u.atan2(self.v).to_degrees().rem_euclid(360.0)
    }

    /// Meteorological direction: the bearing the wind blows from, degrees
    /// clockwise from north in [0, 360).
    pub fn direction_from(&self) -> f64 {
        (self.direction_to() + 180.0).rem_euclid(360.0)
    }

    /// True when both components are finite. Samples taken near a
    /// projection singularity fail this and get dropped by the caller.
    pub fn is_finite(&self) -> bool {
        self.u.is_finite() && self.v.is_finite()
    }
}
