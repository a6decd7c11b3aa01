use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1023 + 52;

/// The exact decimal value of a finite `f64`.
///
/// Represents `(-1)^negative * unscaled * 10^(-scale)`. Every finite binary
/// float has a finite decimal expansion because `2^-k == 5^k / 10^k`, so the
/// conversion from `f64` loses nothing. This is the literal binary value, not
/// the shortest string that round-trips: `0.1` expands to 55 digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactDecimal {
    negative: bool,
    unscaled: BigUint,
    scale: i64,
}

#[inline]
fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

impl ExactDecimal {
    fn zero() -> Self {
        Self {
            negative: false,
            unscaled: BigUint::zero(),
            scale: 0,
        }
    }

    /// Expands `value` exactly. Returns `None` for `NaN` and infinities.
    ///
    /// Integral values get scale 0. Fractional values carry no trailing
    /// decimal zeros. Both signs of zero map to an unsigned zero.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        // 11-bit field, always fits
        #[allow(clippy::cast_possible_truncation)]
        let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);

        // Subnormals have no implicit leading bit and share the smallest exponent
        let (mut mantissa, mut exponent) = if biased == 0 {
            (fraction, 1 - EXPONENT_BIAS)
        } else {
            (fraction | (1u64 << MANTISSA_BITS), biased - EXPONENT_BIAS)
        };

        if mantissa == 0 {
            return Some(Self::zero());
        }

        while exponent < 0 && mantissa & 1 == 0 {
            mantissa >>= 1;
            exponent += 1;
        }

        let (unscaled, scale) = if exponent >= 0 {
            (BigUint::from(mantissa) << exponent.unsigned_abs(), 0)
        } else {
            // m * 2^-k == m * 5^k * 10^-k
            let k = exponent.unsigned_abs();
            (BigUint::from(mantissa) * BigUint::from(5u32).pow(k), i64::from(k))
        };

        Some(Self {
            negative,
            unscaled,
            scale,
        })
    }

    /// True for values below zero; zero itself is never negative.
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Magnitude without the decimal point, `|value| * 10^scale`.
    pub const fn unscaled(&self) -> &BigUint {
        &self.unscaled
    }

    /// Digits after the decimal point. Negative once rounded to tens or above.
    pub const fn scale(&self) -> i64 {
        self.scale
    }

    /// Number of digits in the unscaled value; zero has precision 1.
    pub fn precision(&self) -> i64 {
        if self.unscaled.is_zero() {
            return 1;
        }
        i64::try_from(self.unscaled.to_str_radix(10).len()).unwrap_or(i64::MAX)
    }

    /// Digits left of the decimal point, `precision - scale`.
    ///
    /// Zero or negative for magnitudes below one: `0.00045` has -3.
    pub fn integer_digits(&self) -> i64 {
        self.precision() - self.scale
    }

    /// Rounds to at most `new_scale` fractional digits, ties away from zero.
    ///
    /// A value already representable at `new_scale` is returned unchanged
    /// (its scale is not padded).
    pub fn round_to_scale(self, new_scale: i64) -> Self {
        let dropped = self.scale.saturating_sub(new_scale);
        if dropped <= 0 {
            return self;
        }

        // unscaled < 10^precision <= 10^(dropped - 1), under half of 10^dropped
        if dropped > self.precision() {
            return Self {
                negative: false,
                unscaled: BigUint::zero(),
                scale: new_scale,
            };
        }

        let Ok(dropped) = u32::try_from(dropped) else {
            return Self {
                negative: false,
                unscaled: BigUint::zero(),
                scale: new_scale,
            };
        };
        let divisor = pow10(dropped);
        let mut quotient = &self.unscaled / &divisor;
        let remainder = &self.unscaled % &divisor;
        if (remainder << 1u32) >= divisor {
            quotient += 1u32;
        }

        Self {
            negative: self.negative && !quotient.is_zero(),
            unscaled: quotient,
            scale: new_scale,
        }
    }

    /// Nearest `f64`, correctly rounded. Overflows to an infinity.
    pub fn to_f64(&self) -> f64 {
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{}e{}", self.unscaled, -self.scale)
            .parse::<f64>()
            .unwrap_or(0.0)
    }
}

impl fmt::Display for ExactDecimal {
    /// Plain notation, no exponent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let digits = self.unscaled.to_str_radix(10);
        if self.scale <= 0 {
            f.write_str(&digits)?;
            if !self.unscaled.is_zero() {
                for _ in 0..self.scale.unsigned_abs() {
                    f.write_str("0")?;
                }
            }
            return Ok(());
        }

        let scale = usize::try_from(self.scale.unsigned_abs()).unwrap_or(usize::MAX);
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{int_part}.{frac_part}")
        } else {
            write!(f, "0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }
}
