use crate::decimal::ExactDecimal;

/// Rounds `value` to `sig_figs` significant digits, ties away from zero.
///
/// This is the spreadsheet-style rounding used for reported ages and ratios:
/// `0.125` at two figures is `0.13`, not the `0.12` that half-even gives.
/// Digits are counted on the exact binary value, so `2.675` (stored as
/// `2.67499999...`) rounds to `2.67` at three figures.
///
/// Non-finite input returns `0.0`. Zero returns `+0.0`. With `sig_figs <= 0`
/// the value is rounded to `10^(integer_digits - sig_figs)`, so `567.0` at
/// zero figures is `1000.0`. A result past `f64::MAX` saturates to it.
pub fn round_significant(value: f64, sig_figs: i32) -> f64 {
    let Some(exact) = ExactDecimal::from_f64(value) else {
        return 0.0;
    };
    let new_scale = i64::from(sig_figs) - exact.integer_digits();
    let rounded = exact.round_to_scale(new_scale).to_f64();
    if rounded.is_infinite() {
        f64::MAX.copysign(rounded)
    } else {
        rounded
    }
}

/// Rounds every element of `values`; the input is left untouched.
pub fn round_significant_slice(values: &[f64], sig_figs: i32) -> Vec<f64> {
    values
        .iter()
        .map(|&v| round_significant(v, sig_figs))
        .collect()
}

/// Rounds every element of a possibly ragged matrix, row by row.
pub fn round_significant_matrix<R: AsRef<[f64]>>(rows: &[R], sig_figs: i32) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| round_significant_slice(row.as_ref(), sig_figs))
        .collect()
}
