//! Geographic bounds of the visible map area.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

/// Latitude/longitude edges of the visible map region, in degrees.
///
/// Edges come straight from the host map widget on every pan, zoom or
/// resize. `north > south` is the expected ordering but is not enforced;
/// the wrapped span accessors are total over any ordering, which is all the
/// drawing code relies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Create bounds from the four edges in degrees.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Signed longitude span in degrees. Negative when the edges arrive
    /// swapped; the projection consumes the sign as-is.
    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    /// Longitude span wrapped into [0, 360), whatever the edge ordering.
    pub fn lon_span_wrapped(&self) -> f64 {
        (720.0 + self.east - self.west).rem_euclid(360.0)
    }

    /// Latitude span wrapped into [0, 180), whatever the edge ordering.
    pub fn lat_span_wrapped(&self) -> f64 {
        (360.0 + self.north - self.south).rem_euclid(180.0)
    }

    /// Midpoint of the box as (longitude, latitude).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.east + self.west) / 2.0,
            (self.north + self.south) / 2.0,
        )
    }

    /// Check if a geographic point falls inside the box. Edges count as
    /// inside.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }

    /// Check that both spans are non-zero.
    pub fn validate(&self) -> FieldResult<()> {
        if self.lon_span() == 0.0 || self.north - self.south == 0.0 {
            return Err(FieldError::DegenerateBounds(format!(
                "zero span: N{} S{} E{} W{}",
                self.north, self.south, self.east, self.west
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_for_ordinary_view() {
        let b = GeoBounds::new(50.0, 24.0, -66.0, -125.0);
        assert_eq!(b.lon_span(), 59.0);
        assert_eq!(b.lon_span_wrapped(), 59.0);
        assert_eq!(b.lat_span_wrapped(), 26.0);
    }

    #[test]
    fn test_lon_span_wrapped_across_dateline() {
        // Viewport straddling the antimeridian: east edge numerically
        // smaller than west.
        let b = GeoBounds::new(40.0, 20.0, -170.0, 170.0);
        assert_eq!(b.lon_span(), -340.0);
        assert_eq!(b.lon_span_wrapped(), 20.0);
    }

    #[test]
    fn test_lat_span_wrapped_swapped_edges() {
        let b = GeoBounds::new(-10.0, 30.0, 10.0, 0.0);
        assert_eq!(b.lat_span_wrapped(), 140.0);
    }

    #[test]
    fn test_center() {
        let b = GeoBounds::new(85.0, -85.0, 180.0, -180.0);
        assert_eq!(b.center(), (0.0, 0.0));
    }

    #[test]
    fn test_contains() {
        let b = GeoBounds::new(50.0, 24.0, -66.0, -125.0);
        assert!(b.contains(-94.5, 39.0));
        assert!(b.contains(-125.0, 24.0));
        assert!(!b.contains(0.0, 39.0));
    }

    #[test]
    fn test_validate_rejects_zero_span() {
        assert!(GeoBounds::new(10.0, 10.0, 20.0, 0.0).validate().is_err());
        assert!(GeoBounds::new(10.0, 0.0, 20.0, 20.0).validate().is_err());
        assert!(GeoBounds::new(10.0, 0.0, 20.0, 0.0).validate().is_ok());
    }
}
