//! # gridfill_core: Smooth Grid Reconstruction
//!
//! Numerical core for reconstructing fully-populated coordinate grids from
//! sparse data, as used by carpet-plot coordinate builders:
//!
//! - 1D sequences with gaps are filled by linear interpolation between
//!   known values and linear extrapolation past the edges
//!   (`fill::smooth_fill_1d`)
//! - 2D grids with missing cells are filled by solving the discrete
//!   Laplace equation with stencil weights derived from the possibly
//!   non-uniform axis coordinates (`fill::smooth_fill_2d`)
//!
//! ## Design
//!
//! Known cells are hard constraints and pass through unchanged; only
//! missing cells are solved for. Missing cells are tagged (`Option<T>`)
//! rather than marked with a sentinel value, so any finite value is valid
//! grid data. Both routines are pure functions with no persistent state.
//!
//! Rendering, attribute coercion, event handling and margin negotiation
//! are out of scope; this crate is the numerical leaf those layers call.
//!
//! ## Minimal dependencies
//!
//! - num-traits: generic `T: Float` computation (f32/f64)
//! - thiserror: structured error types
//! - serde: serialisation support (optional, behind the `serde` feature)
//!
//! ## Usage Examples
//!
//! ```rust
//! use gridfill_core::fill::{smooth_fill_1d, smooth_fill_2d};
//! use gridfill_core::types::MaskedGrid;
//!
//! // Sequence fill: interior interpolation plus edge extrapolation
//! let seq = smooth_fill_1d(&[None, None, Some(2.0), Some(3.0)]);
//! assert_eq!(seq, vec![0.0, 1.0, 2.0, 3.0]);
//!
//! // Grid fill: known cells fixed, missing cells relaxed
//! let grid = MaskedGrid::from_rows(&[
//!     vec![Some(1.0_f64), Some(2.0), Some(3.0)],
//!     vec![Some(2.0), None, Some(4.0)],
//!     vec![Some(3.0), Some(4.0), Some(5.0)],
//! ]).unwrap();
//! let filled = smooth_fill_2d(&grid, &[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
//! assert!((filled.get(1, 1) - 3.0).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod fill;
pub mod types;
