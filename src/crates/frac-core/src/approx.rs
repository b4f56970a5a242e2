//! Best rational approximation of a float under a denominator bound.

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;

/// Denominator bound used by [`Fraction::from_float`]
pub const DEFAULT_MAX_DENOMINATOR: i64 = 10_000;

/// Shift beyond which `mantissa / 2^shift < 2^-65`, closer to zero than
/// to `1 / i64::MAX`.
const NEGLIGIBLE_SHIFT: u32 = 118;

impl Fraction {
    /// Closest fraction to `value` with a denominator of at most
    /// [`DEFAULT_MAX_DENOMINATOR`]
    pub fn from_float(value: f64) -> Result<Self> {
        Self::from_float_with_max_denominator(value, DEFAULT_MAX_DENOMINATOR)
    }

    /// Closest fraction to `value` with a denominator of at most
    /// `max_denominator`.
    ///
    /// The float is taken at its exact binary value; when that already fits
    /// under the bound it is returned as is. Otherwise the continued-fraction
    /// convergents are followed up to the bound and the closer of the last
    /// convergent and the largest semiconvergent wins.
    pub fn from_float_with_max_denominator(value: f64, max_denominator: i64) -> Result<Self> {
        if !value.is_finite() {
            return Err(FractionError::NonFinite { value });
        }
        if max_denominator < 1 {
            return Err(FractionError::InvalidMaxDenominator {
                value: max_denominator,
            });
        }

        let Some((numerator, denominator)) = exact_ratio(value.abs())? else {
            return Ok(Fraction::ZERO);
        };
        let (numerator, denominator) =
            limit_denominator(numerator, denominator, max_denominator as u128);

        let numerator = i128::try_from(numerator).map_err(|_| FractionError::Overflow)?;
        let numerator = if value.is_sign_negative() {
            -numerator
        } else {
            numerator
        };
        // denominator <= max_denominator, so the cast is lossless
        Fraction::from_wide(numerator, denominator as i128)
    }
}

/// Split a finite, non-negative float into `numerator / 2^shift` in lowest
/// terms. `None` means the value is zero or negligible.
fn exact_ratio(value: f64) -> Result<Option<(u128, u128)>> {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mut mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    if mantissa == 0 {
        return Ok(None);
    }

    if exponent >= 0 {
        // Anything at or past 2^64 cannot fit an i64 numerator
        if exponent >= 64 {
            return Err(FractionError::Overflow);
        }
        return Ok(Some(((mantissa as u128) << exponent, 1)));
    }

    let mut shift = exponent.unsigned_abs();
    let zeros = mantissa.trailing_zeros().min(shift);
    mantissa >>= zeros;
    shift -= zeros;

    if shift > NEGLIGIBLE_SHIFT {
        return Ok(None);
    }
    Ok(Some((mantissa as u128, 1u128 << shift)))
}

/// Continued-fraction walk over a reduced `numerator / denominator`.
fn limit_denominator(numerator: u128, denominator: u128, max: u128) -> (u128, u128) {
    if denominator <= max {
        return (numerator, denominator);
    }

    // (p0/q0, p1/q1) are the two most recent convergents
    let (mut p0, mut q0, mut p1, mut q1) = (0u128, 1u128, 1u128, 0u128);
    let (mut n, mut d) = (numerator, denominator);

    loop {
        let a = n / d;
        let q2 = match a.checked_mul(q1).and_then(|aq| aq.checked_add(q0)) {
            Some(q2) if q2 <= max => q2,
            _ => break,
        };
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        log::debug!("convergent {}/{} (term {})", p1, q1, a);
        (n, d) = (d, n - a * d);
    }

    // Largest semiconvergent still under the bound
    let k = (max - q0) / q1;
    let bound = q0 + k * q1;

    // |value - p1/q1| = d / (q1 * denominator) and the two candidates sit
    // 1 / (q1 * bound) apart, so the convergent wins iff 2 * d * bound <= denominator.
    let convergent_is_closer = 2u128
        .checked_mul(d)
        .and_then(|twice| twice.checked_mul(bound))
        .is_some_and(|lhs| lhs <= denominator);

    if convergent_is_closer {
        (p1, q1)
    } else {
        log::debug!("semiconvergent {}/{} beats {}/{}", p0 + k * p1, bound, p1, q1);
        (p0 + k * p1, bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_exact_binary_values() {
        assert_eq!(Fraction::from_float(0.75), Ok(frac(3, 4)));
        assert_eq!(Fraction::from_float(-2.5), Ok(frac(-5, 2)));
        assert_eq!(Fraction::from_float(3.0), Ok(Fraction::from_int(3)));
        assert_eq!(Fraction::from_float(0.0), Ok(Fraction::ZERO));
        assert_eq!(Fraction::from_float(-0.0), Ok(Fraction::ZERO));
    }

    #[test]
    fn test_decimal_values() {
        assert_eq!(Fraction::from_float(0.1), Ok(frac(1, 10)));
        assert_eq!(Fraction::from_float(1.1), Ok(frac(11, 10)));
        assert_eq!(Fraction::from_float(-0.333), Ok(frac(-333, 1000)));
        assert_eq!(Fraction::from_float(1.0 / 3.0), Ok(frac(1, 3)));
    }

    #[test]
    fn test_pi_convergents() {
        assert_eq!(Fraction::from_float_with_max_denominator(PI, 1000), Ok(frac(355, 113)));
        assert_eq!(Fraction::from_float_with_max_denominator(PI, 7), Ok(frac(22, 7)));
        assert_eq!(Fraction::from_float_with_max_denominator(PI, 1), Ok(frac(3, 1)));
    }

    #[test]
    fn test_semiconvergent_selected() {
        assert_eq!(Fraction::from_float_with_max_denominator(PI, 100), Ok(frac(311, 99)));
        assert_eq!(Fraction::from_float_with_max_denominator(-PI, 100), Ok(frac(-311, 99)));
    }

    #[test]
    fn test_small_bound_prefers_convergent() {
        assert_eq!(Fraction::from_float_with_max_denominator(0.333, 10), Ok(frac(1, 3)));
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        assert_eq!(Fraction::from_float(1e-300), Ok(Fraction::ZERO));
        assert_eq!(Fraction::from_float(f64::MIN_POSITIVE / 4.0), Ok(Fraction::ZERO));
        assert_eq!(Fraction::from_float(1e-5), Ok(Fraction::ZERO));
        assert_eq!(
            Fraction::from_float_with_max_denominator(1e-5, 100_000),
            Ok(frac(1, 100_000))
        );
    }

    #[test]
    fn test_large_values() {
        assert_eq!(Fraction::from_float(1e15), Ok(Fraction::from_int(1_000_000_000_000_000)));
        assert_eq!(Fraction::from_float(-9.223372036854776e18), Ok(Fraction::from_int(i64::MIN)));
        assert_eq!(Fraction::from_float(1e19), Err(FractionError::Overflow));
        assert_eq!(Fraction::from_float(f64::MAX), Err(FractionError::Overflow));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Fraction::from_float(f64::NAN),
            Err(FractionError::NonFinite { .. })
        ));
        assert!(matches!(
            Fraction::from_float(f64::INFINITY),
            Err(FractionError::NonFinite { .. })
        ));
        assert_eq!(
            Fraction::from_float_with_max_denominator(0.5, 0),
            Err(FractionError::InvalidMaxDenominator { value: 0 })
        );
    }

    #[test]
    fn test_result_respects_bound() {
        for max in [1, 2, 3, 10, 97, 10_000] {
            let f = Fraction::from_float_with_max_denominator(0.6180339887, max).unwrap();
            assert!(f.denominator() <= max);
        }
    }
}
