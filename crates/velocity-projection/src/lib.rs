//! Coordinate transforms for the wind-field renderer.
//!
//! One projection type: a Mercator view bound to a geographic bounding box
//! and a canvas viewport, plus the distortion tensor that corrects raw
//! (u, v) wind vectors for the local warp of that projection.

pub mod distortion;
pub mod mercator;

pub use mercator::MercatorProjection;
