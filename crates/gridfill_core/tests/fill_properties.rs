//! Property tests for the fill routines.
//!
//! Random sparse grids with random (strictly increasing, non-uniform)
//! coordinates must always produce finite, shape-preserving output with
//! every known cell passed through untouched.

use gridfill_core::fill::{smooth_fill_1d, smooth_fill_2d};
use gridfill_core::types::MaskedGrid;
use proptest::prelude::*;

/// Strictly increasing coordinates built from bounded positive gaps.
fn arb_coords(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.5f64..2.0, len).prop_map(|gaps| {
        let mut x = 0.0;
        gaps.iter()
            .map(|g| {
                let cur = x;
                x += g;
                cur
            })
            .collect()
    })
}

fn arb_grid_case() -> impl Strategy<Value = (MaskedGrid<f64>, Vec<f64>, Vec<f64>)> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        let cells = prop::collection::vec(
            prop::option::weighted(0.6, -10.0f64..10.0),
            rows * cols,
        );
        (Just((rows, cols)), cells, arb_coords(rows), arb_coords(cols)).prop_map(
            |((rows, cols), cells, rc, cc)| {
                let row_vecs: Vec<Vec<Option<f64>>> = (0..rows)
                    .map(|i| cells[i * cols..(i + 1) * cols].to_vec())
                    .collect();
                (MaskedGrid::from_rows(&row_vecs).unwrap(), rc, cc)
            },
        )
    })
}

proptest! {
    #[test]
    fn fill_2d_preserves_shape_and_known_cells((grid, rc, cc) in arb_grid_case()) {
        let filled = smooth_fill_2d(&grid, &rc, &cc).unwrap();

        prop_assert_eq!(filled.rows(), grid.rows());
        prop_assert_eq!(filled.cols(), grid.cols());

        for i in 0..grid.rows() {
            for j in 0..grid.cols() {
                if let Some(v) = grid.get(i, j) {
                    // Known cells are copied bit-for-bit.
                    prop_assert_eq!(filled.get(i, j), v);
                }
            }
        }
    }

    #[test]
    fn fill_2d_output_is_finite((grid, rc, cc) in arb_grid_case()) {
        let filled = smooth_fill_2d(&grid, &rc, &cc).unwrap();
        for &v in filled.values() {
            prop_assert!(v.is_finite());
        }
    }

    #[test]
    fn fill_2d_corner_pinned_constant_propagates(
        c in -5.0f64..5.0,
        (grid, rc, cc) in arb_grid_case(),
    ) {
        // Pin the four corners to a constant and set every other known cell
        // to the same constant; the filled grid must be that constant
        // everywhere. (Corner pinning matters: with sparser constraints the
        // boundary conditions admit non-constant solutions.)
        let rows = grid.rows();
        let cols = grid.cols();
        let mut constant_grid = MaskedGrid::new(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let corner = (i == 0 || i == rows - 1) && (j == 0 || j == cols - 1);
                if corner || grid.get(i, j).is_some() {
                    constant_grid.set(i, j, c);
                }
            }
        }

        let filled = smooth_fill_2d(&constant_grid, &rc, &cc).unwrap();
        for &v in filled.values() {
            prop_assert!((v - c).abs() < 1e-3, "got {}, expected {}", v, c);
        }
    }

    #[test]
    fn fill_1d_preserves_length_and_known_entries(
        data in prop::collection::vec(prop::option::weighted(0.5, -10.0f64..10.0), 0..40),
    ) {
        let filled = smooth_fill_1d(&data);
        prop_assert_eq!(filled.len(), data.len());
        for (slot, out) in data.iter().zip(&filled) {
            prop_assert!(out.is_finite());
            if let Some(v) = slot {
                prop_assert_eq!(out, v);
            }
        }
    }

    #[test]
    fn fill_1d_all_missing_is_zero(len in 0usize..40) {
        let data = vec![None; len];
        let filled = smooth_fill_1d::<f64>(&data);
        prop_assert!(filled.iter().all(|&v| v == 0.0));
    }
}
