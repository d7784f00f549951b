//! Error types for the velocity-field crates.

use thiserror::Error;

/// Result type alias using FieldError.
pub type FieldResult<T> = Result<T, FieldError>;

/// Primary error type for wind-field operations.
///
/// The projection hot path is validation-free and total over IEEE-754, so
/// these errors only surface from the fallible constructors and the opt-in
/// `validate` helpers callers use before entering the per-frame loop.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Degenerate bounds: {0}")]
    DegenerateBounds(String),

    #[error("Grid size mismatch for {component}: header implies {expected} points, got {actual}")]
    GridSizeMismatch {
        component: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Empty grid: nx and ny must be positive, got {nx}x{ny}")]
    EmptyGrid { nx: usize, ny: usize },
}
