/// Percentile of an ascending, NaN-free, non-empty slice.
///
/// Rank is `p / 100 * (n - 1)`, zero-indexed; fractional ranks interpolate
/// linearly between the two neighbouring order statistics, so a pair of equal
/// infinities interpolates to NaN.
#[inline]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let p = if p.is_nan() { 50.0 } else { p.clamp(0.0, 100.0) };
    // rank lies in [0, len - 1], so both index casts stay in bounds
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let frac = rank.fract();
    let lower = sorted[rank.floor() as usize];
    if frac == 0.0 {
        return lower;
    }
    let upper = sorted[rank.ceil() as usize];
    lower + frac * (upper - lower)
}

/// Interpolated-rank percentile of `values`, with `p` in percent.
///
/// `p` is clamped to `[0, 100]`. NaN entries are ignored. Returns `0.0` for an
/// empty slice and `NaN` when every entry is NaN.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_by(f64::total_cmp);
    percentile_of_sorted(&sorted, p)
}

/// Median of `values` as the interpolated 50th percentile.
///
/// Even-length input averages the two middle elements through the
/// interpolation, so `[1, 2, 3, 4]` gives `2.5`. Empty input gives `0.0`.
#[inline]
pub fn median(values: &[f64]) -> f64 {
    percentile(values, 50.0)
}
