//! Synthetic wind-grid generators.
//!
//! These generators create predictable, verifiable wind fields that can be
//! used across the test suite without shipping real model output.

use velocity_common::{GridHeader, WindGrid};

/// Header for a global grid with `deg`-degree spacing, first point at
/// (0°E, 90°N), rows scanning south. Covers the full longitude circle, so
/// [`GridHeader::wraps_longitude`] is true.
pub fn global_header(deg: f64) -> GridHeader {
    let nx = (360.0 / deg) as usize;
    let ny = (180.0 / deg) as usize + 1;
    GridHeader {
        nx,
        ny,
        lo1: 0.0,
        la1: 90.0,
        dx: deg,
        dy: deg,
        ref_time: None,
    }
}

/// A global grid blowing uniformly with the given components everywhere.
///
/// Interpolation anywhere on the globe returns exactly `(u, v)`, which
/// makes distortion-pipeline output easy to predict.
pub fn uniform_wind_grid(deg: f64, u: f32, v: f32) -> WindGrid {
    let header = global_header(deg);
    let n = header.len();
    WindGrid::new(header, vec![u; n], vec![v; n]).expect("generator produced a bad grid")
}

/// A global grid with predictable per-node values: `u = col * 1000 + row`,
/// `v = -(col * 1000 + row)`.
///
/// This makes it easy to verify that data is being indexed correctly by
/// checking that node (i, j) carries `i * 1000 + j`.
pub fn indexed_wind_grid(deg: f64) -> WindGrid {
    let header = global_header(deg);
    let mut u = Vec::with_capacity(header.len());
    let mut v = Vec::with_capacity(header.len());
    for row in 0..header.ny {
        for col in 0..header.nx {
            let value = (col * 1000 + row) as f32;
            u.push(value);
            v.push(-value);
        }
    }
    WindGrid::new(header, u, v).expect("generator produced a bad grid")
}

/// A global grid with purely zonal flow whose strength varies by row:
/// `u = la1 - row * dy` (the latitude of the row), `v = 0`.
///
/// Useful for checking that latitude lookup hits the right row band.
pub fn zonal_wind_grid(deg: f64) -> WindGrid {
    let header = global_header(deg);
    let mut u = Vec::with_capacity(header.len());
    for row in 0..header.ny {
        let lat = header.lat_of(row) as f32;
        for _ in 0..header.nx {
            u.push(lat);
        }
    }
    let v = vec![0.0; header.len()];
    WindGrid::new(header, u, v).expect("generator produced a bad grid")
}
