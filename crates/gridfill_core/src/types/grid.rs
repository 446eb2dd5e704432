//! Grid buffer types for fill operations.
//!
//! Missing cells are represented by a tagged `Option<T>` rather than a
//! sentinel value, so any finite data value is legitimate grid content.

use crate::types::FillError;
use num_traits::Float;

/// Rectangular grid of known and missing cells.
///
/// Stores an owned, row-major buffer of `Option<T>` cells. `Some(v)` is a
/// known value that fill operations must pass through unchanged; `None` is
/// a missing cell to be reconstructed.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use gridfill_core::types::MaskedGrid;
///
/// let grid = MaskedGrid::from_rows(&[
///     vec![Some(1.0), None, Some(3.0)],
///     vec![None, Some(5.0), None],
/// ]).unwrap();
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.get(0, 0), Some(1.0));
/// assert_eq!(grid.get(1, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskedGrid<T: Float> {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Row-major cell buffer, length `rows * cols`
    cells: Vec<Option<T>>,
}

impl<T: Float> MaskedGrid<T> {
    /// Create an all-missing grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Construct a grid from per-row cell slices.
    ///
    /// Every row must have the same length as the first row.
    ///
    /// # Returns
    ///
    /// * `Ok(MaskedGrid)` - Successfully constructed grid
    /// * `Err(FillError::RaggedRows)` - Rows of inconsistent length
    ///
    /// # Example
    ///
    /// ```
    /// use gridfill_core::types::MaskedGrid;
    ///
    /// let result = MaskedGrid::from_rows(&[
    ///     vec![Some(1.0), Some(2.0)],
    ///     vec![Some(3.0)],
    /// ]);
    /// assert!(result.is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Option<T>]>>(rows: &[R]) -> Result<Self, FillError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(FillError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        assert!(i < self.rows && j < self.cols, "cell index out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Set the cell at row `i`, column `j` to a known value.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.rows && j < self.cols, "cell index out of bounds");
        self.cells[i * self.cols + j] = Some(value);
    }

    /// Mark the cell at row `i`, column `j` as missing.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn clear(&mut self, i: usize, j: usize) {
        assert!(i < self.rows && j < self.cols, "cell index out of bounds");
        self.cells[i * self.cols + j] = None;
    }

    /// The raw row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Returns true if every cell is known.
    pub fn is_fully_known(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

/// Fully-populated rectangular grid produced by a fill operation.
///
/// Same dimensions as the input [`MaskedGrid`]; known cells carry the
/// input values unchanged, missing cells carry reconstructed values.
///
/// # Example
///
/// ```
/// use gridfill_core::types::MaskedGrid;
/// use gridfill_core::fill::smooth_fill_2d;
///
/// let grid = MaskedGrid::from_rows(&[
///     vec![Some(1.0), Some(2.0)],
///     vec![Some(3.0), None],
/// ]).unwrap();
///
/// let filled = smooth_fill_2d(&grid, &[0.0, 1.0], &[0.0, 1.0]).unwrap();
/// assert_eq!(filled.rows(), 2);
/// assert_eq!(filled.get(0, 1), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T: Float> {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Row-major value buffer, length `rows * cols`
    values: Vec<T>,
}

impl<T: Float> Grid<T> {
    /// Assemble a grid from a row-major buffer.
    ///
    /// Internal constructor: callers obtain `Grid` values from fill
    /// operations.
    pub(crate) fn from_raw(rows: usize, cols: usize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self { rows, cols, values }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "cell index out of bounds");
        self.values[i * self.cols + j]
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row index out of bounds");
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    /// The raw row-major value buffer.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Copy out the grid as nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }
}
