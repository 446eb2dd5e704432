//! Core types for grid fill operations.
//!
//! - [`MaskedGrid`]: rectangular grid of known and missing cells
//! - [`Grid`]: fully-populated output grid
//! - [`FillError`], [`GridAxis`]: structured error reporting

pub mod error;
pub mod grid;

pub use error::{FillError, GridAxis};
pub use grid::{Grid, MaskedGrid};
