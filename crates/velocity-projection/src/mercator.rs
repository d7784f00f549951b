//! Mercator view projection.
//!
//! Binds one geographic bounding box to one canvas viewport and converts
//! between the two spaces. The box edges arrive in degrees from the host
//! map widget; internally everything runs in radians, converted once at
//! construction.
//!
//! The horizontal scale is linear in longitude and the vertical scale is
//! linear in Mercator Y, each fitted independently so the box exactly fills
//! the canvas. The inverse is the algebraic inverse of the forward, so
//! pixel -> geo -> pixel round-trips are exact for any viewport aspect
//! ratio, not only aspect ratios that match the box.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use velocity_common::{GeoBounds, Viewport};

/// Mercator Y for a latitude in radians: `ln(tan(φ/2 + π/4))`.
///
/// Strictly increasing, diverging as φ approaches ±π/2. Out-of-range
/// latitudes produce NaN; the drawing code filters non-finite results
/// rather than this function guarding them.
pub fn mercator_y(phi: f64) -> f64 {
    (phi / 2.0 + FRAC_PI_4).tan().ln()
}

/// A Mercator projection fixed to one (bounds, viewport) pairing.
///
/// Construction performs no validation: a degenerate box or viewport
/// produces NaN/infinite coordinates downstream, by design, to keep the
/// per-particle path free of branches. Replace the instance wholesale when
/// the visible region or canvas size changes; nothing mutates after
/// construction, so shared references are safe across threads.
#[derive(Debug, Clone)]
pub struct MercatorProjection {
    /// The geographic box this projection was built from, degrees.
    pub bounds: GeoBounds,
    /// The canvas rectangle the box is mapped onto.
    pub viewport: Viewport,
    /// West edge in radians
    west: f64,
    /// Mercator Y of the north edge
    y_max: f64,
    /// Pixels per radian of longitude
    x_factor: f64,
    /// Pixels per unit of Mercator Y
    y_factor: f64,
}

impl MercatorProjection {
    /// Build a projection for the currently visible map region.
    pub fn new(bounds: GeoBounds, viewport: Viewport) -> Self {
        let north = bounds.north.to_radians();
        let south = bounds.south.to_radians();
        let east = bounds.east.to_radians();
        let west = bounds.west.to_radians();

        let y_min = mercator_y(south);
        let y_max = mercator_y(north);

        Self {
            bounds,
            viewport,
            west,
            y_max,
            x_factor: viewport.width / (east - west),
            y_factor: viewport.height / (y_max - y_min),
        }
    }

    /// Project a geographic point (degrees) onto the canvas.
    ///
    /// The box corners land on the canvas corners: (west, north) at (0, 0)
    /// and (east, south) at (width, height).
    pub fn geo_to_canvas(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = (lon.to_radians() - self.west) * self.x_factor;
        let y = (self.y_max - mercator_y(lat.to_radians())) * self.y_factor;
        (x, y)
    }

    /// Recover the geographic point (degrees) under a canvas pixel.
    ///
    /// Exact inverse of [`geo_to_canvas`](Self::geo_to_canvas) up to
    /// floating point. The latitude comes back through the inverse
    /// Gudermannian `2·atan(exp(a)) − π/2`.
    pub fn canvas_to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let a = self.y_max - y / self.y_factor;
        let lat = (2.0 * a.exp().atan() - FRAC_PI_2).to_degrees();
        let lon = (self.west + x / self.x_factor).to_degrees();
        (lon, lat)
    }
}
