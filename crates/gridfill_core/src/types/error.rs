//! Error types for structured error handling.
//!
//! This module provides:
//! - `FillError`: Errors from grid fill operations
//! - `GridAxis`: Identifies which grid axis an error refers to

use std::fmt;
use thiserror::Error;

/// Identifies a grid axis in error reports.
///
/// # Examples
/// ```
/// use gridfill_core::types::GridAxis;
///
/// assert_eq!(format!("{}", GridAxis::Rows), "row");
/// assert_eq!(format!("{}", GridAxis::Cols), "column");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridAxis {
    /// The row axis (first grid dimension).
    Rows,
    /// The column axis (second grid dimension).
    Cols,
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAxis::Rows => write!(f, "row"),
            GridAxis::Cols => write!(f, "column"),
        }
    }
}

/// Grid fill errors.
///
/// Provides structured error handling for fill operations with
/// descriptive context for each failure mode. Every variant is a
/// contract violation: there is no partial result and no recovery
/// path inside the filler.
///
/// # Variants
/// - `DimensionMismatch`: Coordinate length does not match the grid dimension
/// - `NonMonotonicCoords`: Coordinate sequence is not strictly monotonic
/// - `RaggedRows`: Grid rows have inconsistent lengths
///
/// # Examples
/// ```
/// use gridfill_core::types::{FillError, GridAxis};
///
/// let err = FillError::DimensionMismatch {
///     axis: GridAxis::Rows,
///     expected: 4,
///     got: 3,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "row coordinate length 3 does not match grid row count 4"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillError {
    /// Coordinate sequence length does not match the grid dimension.
    #[error("{axis} coordinate length {got} does not match grid {axis} count {expected}")]
    DimensionMismatch {
        /// The axis whose coordinates were mis-sized
        axis: GridAxis,
        /// The grid dimension along that axis
        expected: usize,
        /// The coordinate sequence length provided
        got: usize,
    },

    /// Coordinate sequence is not strictly monotonic.
    #[error("{axis} coordinates are not strictly monotonic at index {index}")]
    NonMonotonicCoords {
        /// The axis whose coordinates violate monotonicity
        axis: GridAxis,
        /// Index of the first offending coordinate pair
        index: usize,
    },

    /// Grid constructed from rows of inconsistent length.
    #[error("grid row {row} has length {got}, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },
}
