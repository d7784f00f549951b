//! Canvas viewport rectangle.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

/// A rectangle in canvas pixel space describing the visible drawing area.
///
/// The origin is the offset of the canvas within its host element and is
/// almost always (0, 0). The projection math only reads the extents.
///
/// Construction does not validate. Callers that want the positive-extent
/// invariant checked before entering the render loop use [`Viewport::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport from origin and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport with a (0, 0) origin, the common case.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Check the positive-extent invariant.
    pub fn validate(&self) -> FieldResult<()> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(FieldError::InvalidViewport(format!(
                "extents must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
