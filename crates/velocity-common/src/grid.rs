//! Regular lat/lon wind grids and bilinear sampling.
//!
//! The animation driver feeds the engine one (u, v) sample per particle per
//! tick. Those samples come out of a regular latitude/longitude grid whose
//! header uses the vocabulary of the common GRIB-to-JSON converters: first
//! point at (`lo1`, `la1`), columns stepping east by `dx`, rows stepping
//! south by `dy`, row-major data. Decoding the source file is the host
//! application's job; this module starts from already-decoded arrays.

use chrono::{DateTime, Utc};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::bounds::GeoBounds;
use crate::error::{FieldError, FieldResult};
use crate::wind::WindVector;

/// Header of a regular lat/lon wind grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridHeader {
    /// Number of columns (longitude direction).
    pub nx: usize,
    /// Number of rows (latitude direction).
    pub ny: usize,
    /// Longitude of the first column, degrees east.
    pub lo1: f64,
    /// Latitude of the first row, degrees north. Rows scan southward.
    pub la1: f64,
    /// Column spacing in degrees, positive eastward.
    pub dx: f64,
    /// Row spacing in degrees, positive southward.
    pub dy: f64,
    /// Model reference time, when the source carries one.
    #[serde(rename = "refTime", default, skip_serializing_if = "Option::is_none")]
    pub ref_time: Option<DateTime<Utc>>,
}

impl GridHeader {
    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// Check if the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0
    }

    /// True when the columns cover the full circle of longitude, so the
    /// seam column interpolates against column 0.
    pub fn wraps_longitude(&self) -> bool {
        (self.nx as f64 * self.dx).floor() >= 360.0
    }

    /// Longitude of column `i` in degrees.
    pub fn lon_of(&self, i: usize) -> f64 {
        self.lo1 + i as f64 * self.dx
    }

    /// Latitude of row `j` in degrees.
    pub fn lat_of(&self, j: usize) -> f64 {
        self.la1 - j as f64 * self.dy
    }

    /// Geographic extent of the grid nodes.
    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::new(
            self.la1,
            self.lat_of(self.ny.saturating_sub(1)),
            self.lon_of(self.nx.saturating_sub(1)),
            self.lo1,
        )
    }
}

/// Bilinear blend of four corner values, `tx`/`ty` in [0, 1].
///
/// `g00`/`g10` are the north row west/east corners, `g01`/`g11` the south
/// row.
pub fn bilinear<T: Float>(g00: T, g10: T, g01: T, g11: T, tx: T, ty: T) -> T {
    let north = g00 + (g10 - g00) * tx;
    let south = g01 + (g11 - g01) * tx;
    north + (south - north) * ty
}

/// A wind grid: header plus row-major u and v component planes.
///
/// Component planes are `f32` as delivered by the decoders; sampling
/// promotes to `f64` for the projection math.
#[derive(Debug, Clone)]
pub struct WindGrid {
    header: GridHeader,
    u: Vec<f32>,
    v: Vec<f32>,
}

impl WindGrid {
    /// Create a grid from a header and decoded component planes.
    ///
    /// Fails when the plane lengths do not match `nx * ny`.
    pub fn new(header: GridHeader, u: Vec<f32>, v: Vec<f32>) -> FieldResult<Self> {
        if header.is_empty() {
            return Err(FieldError::EmptyGrid {
                nx: header.nx,
                ny: header.ny,
            });
        }
        let expected = header.len();
        if u.len() != expected {
            return Err(FieldError::GridSizeMismatch {
                component: "u",
                expected,
                actual: u.len(),
            });
        }
        if v.len() != expected {
            return Err(FieldError::GridSizeMismatch {
                component: "v",
                expected,
                actual: v.len(),
            });
        }
        Ok(Self { header, u, v })
    }

    /// The grid header.
    pub fn header(&self) -> &GridHeader {
        &self.header
    }

    /// Wind vector at grid node (i, j), or None when out of range.
    pub fn node(&self, i: usize, j: usize) -> Option<WindVector> {
        if i >= self.header.nx || j >= self.header.ny {
            return None;
        }
        let idx = j * self.header.nx + i;
        Some(WindVector::new(self.u[idx] as f64, self.v[idx] as f64))
    }

    /// Bilinearly interpolated wind at a geographic point.
    ///
    /// Returns None outside the grid coverage. On a full-circle grid the
    /// longitude is wrapped into coverage and the seam column interpolates
    /// against column 0.
    pub fn interpolate(&self, lon: f64, lat: f64) -> Option<WindVector> {
        let h = &self.header;
        let mut i = (lon - h.lo1) / h.dx;
        let j = (h.la1 - lat) / h.dy;
        if !i.is_finite() || !j.is_finite() {
            return None;
        }

        let nx = h.nx;
        let ny = h.ny;
        let wraps = h.wraps_longitude();
        if wraps {
            i = i.rem_euclid(nx as f64);
        } else if i < 0.0 || i > (nx - 1) as f64 {
            return None;
        }
        if j < 0.0 || j > (ny - 1) as f64 {
            return None;
        }

        // rem_euclid can round up to exactly nx for tiny negative inputs;
        // the clamp keeps the index in range and the blend lands on the
        // wrapped column anyway.
        let i0 = (i.floor() as usize).min(nx - 1);
        let j0 = (j.floor() as usize).min(ny - 1);
        let i1 = if wraps {
            (i0 + 1) % nx
        } else {
            (i0 + 1).min(nx - 1)
        };
        let j1 = (j0 + 1).min(ny - 1);
        let tx = i - i0 as f64;
        let ty = j - j0 as f64;

        let at = |i: usize, j: usize| -> usize { j * nx + i };
        let u = bilinear(
            self.u[at(i0, j0)] as f64,
            self.u[at(i1, j0)] as f64,
            self.u[at(i0, j1)] as f64,
            self.u[at(i1, j1)] as f64,
            tx,
            ty,
        );
        let v = bilinear(
            self.v[at(i0, j0)] as f64,
            self.v[at(i1, j0)] as f64,
            self.v[at(i0, j1)] as f64,
            self.v[at(i1, j1)] as f64,
            tx,
            ty,
        );
        Some(WindVector::new(u, v))
    }
}
