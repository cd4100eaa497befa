//! Linear interpolation on tabulated 1D data.

/// Piecewise-linear interpolation of `(xs, ys)` at `x`.
///
/// `xs` must be strictly increasing and the same length as `ys`.
/// Clamps to the end values outside [xs[0], xs[n-1]], matching `numpy.interp`.
pub fn interp1d(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len(), "interp1d table length mismatch");
    let n = xs.len();
    if n == 0 {
        return 0.0;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First index with xs[i] > x; 1 <= hi <= n-1 after the clamps above.
    let hi = xs.partition_point(|&xi| xi <= x);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    (1.0 - t) * ys[lo] + t * ys[hi]
}

/// True when `xs` is strictly increasing and finite.
pub fn is_strictly_increasing(xs: &[f64]) -> bool {
    xs.iter().all(|x| x.is_finite()) && xs.windows(2).all(|w| w[1] > w[0])
}
