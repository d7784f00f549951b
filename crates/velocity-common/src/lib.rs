//! Common types shared across the velocity-field crates.

pub mod bounds;
pub mod error;
pub mod grid;
pub mod viewport;
pub mod wind;

pub use bounds::GeoBounds;
pub use error::{FieldError, FieldResult};
pub use grid::{GridHeader, WindGrid};
pub use viewport::Viewport;
pub use wind::WindVector;
