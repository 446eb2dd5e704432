//! Smooth-fill operations for sparse sequences and grids.
//!
//! This module provides the two reconstruction routines consumed by
//! carpet-style coordinate builders:
//!
//! - [`smooth_fill_1d`]: fill a 1D sequence by linear interpolation with
//!   edge extrapolation
//! - [`smooth_fill_2d`]: fill a 2D grid by relaxing the discrete Laplace
//!   equation with coordinate-weighted stencils
//!
//! Both are pure, synchronous and deterministic. Known values are never
//! altered, and output dimensions always equal input dimensions.
//!
//! ## Solver behaviour
//!
//! The 2D filler iterates Gauss-Seidel sweeps until the root-mean-square
//! relative update falls below the configured tolerance, escalating the
//! iteration budget internally if needed. [`RelaxationConfig`] exposes the
//! tolerance, budget and over-relaxation factor; the plain entry point uses
//! defaults suited to display precision.
//!
//! ## Example
//!
//! ```
//! use gridfill_core::fill::{smooth_fill_1d, smooth_fill_2d};
//! use gridfill_core::types::MaskedGrid;
//!
//! let seq = smooth_fill_1d(&[None, Some(1.0), Some(2.0), None]);
//! assert_eq!(seq, vec![0.0, 1.0, 2.0, 3.0]);
//!
//! let grid = MaskedGrid::from_rows(&[
//!     vec![Some(0.0_f64), Some(1.0)],
//!     vec![Some(1.0), None],
//! ]).unwrap();
//! let filled = smooth_fill_2d(&grid, &[0.0, 1.0], &[0.0, 1.0]).unwrap();
//! assert!(filled.get(1, 1).is_finite());
//! ```

mod fill_1d;
mod fill_2d;
mod relaxation;

// Re-export public items at module level
pub use fill_1d::smooth_fill_1d;
pub use fill_2d::{smooth_fill_2d, smooth_fill_2d_with};
pub use relaxation::RelaxationConfig;
