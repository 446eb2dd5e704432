//! One-dimensional smooth fill.

use num_traits::Float;

/// Fill missing entries of a sequence by linear interpolation and
/// edge extrapolation.
///
/// Treats indices as unit-spaced coordinates:
/// - gaps between two known values are filled by linear interpolation,
/// - runs before the first (after the last) known value are extrapolated
///   with the slope of the nearest known segment.
///
/// Degenerate inputs have defined results: an all-missing sequence fills
/// with zeros, a single known value fills as a constant.
///
/// # Arguments
/// * `data` - Sequence of known (`Some`) and missing (`None`) entries
///
/// # Returns
/// Fully-populated sequence of the same length; known entries are passed
/// through unchanged.
///
/// # Examples
/// ```
/// use gridfill_core::fill::smooth_fill_1d;
///
/// let filled = smooth_fill_1d(&[None, Some(1.0), Some(2.0), Some(3.0)]);
/// assert_eq!(filled, vec![0.0, 1.0, 2.0, 3.0]);
///
/// let filled = smooth_fill_1d(&[Some(0.0), Some(1.0), None, None]);
/// assert_eq!(filled, vec![0.0, 1.0, 2.0, 3.0]);
/// ```
#[inline]
pub fn smooth_fill_1d<T: Float>(data: &[Option<T>]) -> Vec<T> {
    let n = data.len();
    let idx = |i: usize| T::from(i).unwrap();

    let known: Vec<(usize, T)> = data
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|x| (i, x)))
        .collect();

    if known.is_empty() {
        return vec![T::zero(); n];
    }
    if known.len() == 1 {
        return vec![known[0].1; n];
    }

    let mut out = vec![T::zero(); n];
    for &(i, v) in &known {
        out[i] = v;
    }

    // Interior gaps: linear interpolation between bounding known values.
    for pair in known.windows(2) {
        let (xa, ya) = pair[0];
        let (xb, yb) = pair[1];
        let slope = (yb - ya) / (idx(xb) - idx(xa));
        for (i, slot) in out.iter_mut().enumerate().take(xb).skip(xa + 1) {
            *slot = ya + slope * (idx(i) - idx(xa));
        }
    }

    // Leading run: extrapolate with the slope of the first known segment.
    let (x0, y0) = known[0];
    let (x1, y1) = known[1];
    let lead_slope = (y1 - y0) / (idx(x1) - idx(x0));
    for (i, slot) in out.iter_mut().enumerate().take(x0) {
        *slot = y0 + lead_slope * (idx(i) - idx(x0));
    }

    // Trailing run: extrapolate with the slope of the last known segment.
    let (xl, yl) = known[known.len() - 1];
    let (xk, yk) = known[known.len() - 2];
    let trail_slope = (yl - yk) / (idx(xl) - idx(xk));
    for (i, slot) in out.iter_mut().enumerate().skip(xl + 1) {
        *slot = yl + trail_slope * (idx(i) - idx(xl));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a, e, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_fills_via_linear_interpolation() {
        let data = [
            None,
            None,
            Some(2.0),
            Some(3.0),
            None,
            None,
            Some(6.0),
            Some(7.0),
            None,
            None,
            Some(10.0),
            Some(11.0),
            None,
        ];
        let expected: Vec<f64> = (0..13).map(|i| i as f64).collect();
        assert_close(&smooth_fill_1d(&data), &expected);
    }

    #[test]
    fn test_fills_with_zero_if_no_data() {
        assert_close(&smooth_fill_1d::<f64>(&[None, None, None]), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_fills_with_constant_if_one_data_point() {
        let data = [None, None, None, None, Some(8.0), None, None];
        assert_close(&smooth_fill_1d(&data), &[8.0; 7]);
    }

    #[test]
    fn test_fills_one_leading_point() {
        let data = [None, Some(1.0), Some(2.0), Some(3.0)];
        assert_close(&smooth_fill_1d(&data), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fills_two_leading_points() {
        let data = [None, None, Some(2.0), Some(3.0)];
        assert_close(&smooth_fill_1d(&data), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fills_one_trailing_point() {
        let data = [Some(0.0), Some(1.0), Some(2.0), None];
        assert_close(&smooth_fill_1d(&data), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fills_two_trailing_points() {
        let data = [Some(0.0), Some(1.0), None, None];
        assert_close(&smooth_fill_1d(&data), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_known_values_pass_through_unchanged() {
        let data = [Some(1.5), None, Some(-2.5), None, Some(0.25)];
        let out = smooth_fill_1d(&data);
        assert_eq!(out[0], 1.5);
        assert_eq!(out[2], -2.5);
        assert_eq!(out[4], 0.25);
    }

    #[test]
    fn test_extrapolation_uses_nearest_segment_slope() {
        // Segments have different slopes; each edge must follow its own.
        let data = [None, Some(0.0), Some(2.0), Some(3.0), None];
        assert_close(&smooth_fill_1d(&data), &[-2.0, 0.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_empty_input() {
        let out = smooth_fill_1d::<f64>(&[]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_fully_known_is_identity() {
        let data = [Some(3.0), Some(1.0), Some(4.0)];
        assert_close(&smooth_fill_1d(&data), &[3.0, 1.0, 4.0]);
    }

    #[test]
    fn test_with_f32() {
        let data = [None, Some(1.0_f32), Some(2.0_f32), None];
        let out = smooth_fill_1d(&data);
        assert!((out[0] - 0.0).abs() < 1e-6);
        assert!((out[3] - 3.0).abs() < 1e-6);
    }
}
