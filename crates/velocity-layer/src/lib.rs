//! Host-facing wind layer.
//!
//! Sits between a host map widget and the projection engine: owns the
//! current wind grid and the projection for the visible view, rebuilds the
//! projection when the view changes, and turns canvas pixels into
//! projection-corrected wind samples for the animation loop to advect.

pub mod host;
pub mod layer;

pub use host::{HostEvent, MapHost};
pub use layer::{FieldSample, WindLayer};
