//! The wind layer: grid + projection lifecycle and field sampling.

use rayon::prelude::*;
use tracing::{debug, info};

use velocity_common::{WindGrid, WindVector};
use velocity_projection::MercatorProjection;

use crate::host::{HostEvent, MapHost};

/// One projection-corrected sample of the wind field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Canvas pixel the sample was taken at.
    pub x: f64,
    pub y: f64,
    /// Geographic position under that pixel, degrees.
    pub lon: f64,
    pub lat: f64,
    /// Wind vector after scaling and distortion correction, in canvas
    /// units per tick.
    pub wind: WindVector,
}

/// Owns the wind grid and the projection for the current view.
///
/// The projection is a value that is replaced, never mutated: every view
/// change throws the old one away and builds a fresh one from the host's
/// reported bounds and canvas size. Between changes the layer is read-only
/// and can be sampled from any thread.
#[derive(Debug, Default)]
pub struct WindLayer {
    grid: Option<WindGrid>,
    projection: Option<MercatorProjection>,
}

impl WindLayer {
    /// An empty layer: no data, no view yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a wind grid. Keeps the current projection; the next
    /// sampling call picks the new data up immediately.
    pub fn set_grid(&mut self, grid: WindGrid) {
        let header = grid.header();
        info!(
            nx = header.nx,
            ny = header.ny,
            wraps = header.wraps_longitude(),
            "Wind grid installed"
        );
        self.grid = Some(grid);
    }

    /// Drop the current wind grid; sampling returns nothing until a new
    /// one is installed.
    pub fn clear_grid(&mut self) {
        self.grid = None;
    }

    /// The installed grid, if any.
    pub fn grid(&self) -> Option<&WindGrid> {
        self.grid.as_ref()
    }

    /// The projection for the current view, if one has been built.
    pub fn projection(&self) -> Option<&MercatorProjection> {
        self.projection.as_ref()
    }

    /// Rebuild the projection from the host's current state.
    ///
    /// Returns true when a new projection was built, false when neither
    /// the visible bounds nor the canvas changed, so hosts may call this
    /// every frame.
    pub fn sync(&mut self, host: &dyn MapHost) -> bool {
        let bounds = host.visible_bounds();
        let viewport = host.viewport();

        if let Some(current) = &self.projection {
            if current.bounds == bounds && current.viewport == viewport {
                return false;
            }
        }

        debug!(
            north = bounds.north,
            south = bounds.south,
            east = bounds.east,
            west = bounds.west,
            width = viewport.width,
            height = viewport.height,
            "Rebuilding view projection"
        );
        self.projection = Some(MercatorProjection::new(bounds, viewport));
        true
    }

    /// Named-callback entry point for host view changes. Every event
    /// invalidates the projection the same way; the name only feeds the
    /// log. Returns true when the projection was rebuilt.
    pub fn handle_event(&mut self, host: &dyn MapHost, event: HostEvent) -> bool {
        debug!(?event, "Host view changed");
        self.sync(host)
    }

    /// Sample the corrected wind field at one canvas pixel.
    ///
    /// Runs the full per-point pipeline: inverse-project the pixel,
    /// interpolate the grid, distort the vector. Returns None when no grid
    /// or projection is present, when the pixel falls outside the grid
    /// coverage, or when a projection singularity produced a non-finite
    /// value — the animation loop just skips such particles.
    pub fn sample_at(&self, x: f64, y: f64, scale: f64) -> Option<FieldSample> {
        let proj = self.projection.as_ref()?;
        let grid = self.grid.as_ref()?;

        let (lon, lat) = proj.canvas_to_geo(x, y);
        if !lon.is_finite() || !lat.is_finite() {
            return None;
        }
        let raw = grid.interpolate(lon, lat)?;
        let wind = proj.distort(lon, lat, x, y, scale, raw);
        if !wind.is_finite() {
            return None;
        }
        Some(FieldSample {
            x,
            y,
            lon,
            lat,
            wind,
        })
    }

    /// Sample the corrected field on a `step`-pixel lattice over the whole
    /// viewport, in parallel. Pixels without data are skipped, so the
    /// result can be shorter than the lattice. A non-positive `step`
    /// yields no samples.
    pub fn sample_field(&self, step: f64, scale: f64) -> Vec<FieldSample> {
        let Some(proj) = self.projection.as_ref() else {
            return Vec::new();
        };
        if self.grid.is_none() || !(step > 0.0) {
            return Vec::new();
        }

        let cols = (proj.viewport.width / step).floor() as usize + 1;
        let rows = (proj.viewport.height / step).floor() as usize + 1;

        let samples: Vec<FieldSample> = (0..rows)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..cols).filter_map(move |col| {
                    self.sample_at(col as f64 * step, row as f64 * step, scale)
                })
            })
            .collect();

        debug!(
            rows,
            cols,
            kept = samples.len(),
            "Sampled wind field"
        );
        samples
    }
}
