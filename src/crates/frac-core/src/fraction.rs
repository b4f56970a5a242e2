use crate::error::{FractionError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Decimal places kept by [`Fraction::to_float`]
pub const DEFAULT_PRECISION: i32 = 3;

/// No finite `f64` has more fractional decimal digits than this
const MAX_FRACTION_DIGITS: i32 = 1074;

/// Exact rational number kept in canonical reduced form.
///
/// Every constructor reduces by the gcd and moves the sign into the
/// numerator, so the denominator is always positive and two fractions are
/// numerically equal exactly when their stored pairs are identical.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFraction")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// Unvalidated wire shape; deserialization reduces it through [`Fraction::new`]
#[derive(Deserialize)]
struct RawFraction {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = FractionError;

    fn try_from(raw: RawFraction) -> Result<Self> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Create a new fraction and reduce it
    ///
    /// Fails with [`FractionError::DivisionByZero`] when `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /// Create a fraction from a whole number
    pub const fn from_int(n: i64) -> Self {
        Fraction {
            numerator: n,
            denominator: 1,
        }
    }

    /// Reduce a 128-bit pair and narrow it back to `i64`.
    ///
    /// Arithmetic forms its cross products here so that a result which
    /// reduces into range never overflows on the way.
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self> {
        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }

        // gcd(0, d) == |d|, so zero always lands on 0/1
        let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
        let mut numerator = numerator / g;
        let mut denominator = denominator / g;

        // Keep denominator positive
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        Ok(Fraction {
            numerator: i64::try_from(numerator).map_err(|_| FractionError::Overflow)?,
            denominator: i64::try_from(denominator).map_err(|_| FractionError::Overflow)?,
        })
    }

    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Both halves widened for overflow-free cross products
    pub(crate) fn wide(self) -> (i128, i128) {
        (self.numerator as i128, self.denominator as i128)
    }

    /// Check if fraction is zero
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Check if fraction is negative
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Get the reciprocal
    pub fn reciprocal(self) -> Result<Self> {
        Self::new(self.denominator, self.numerator)
    }

    /// Absolute value
    ///
    /// Panics when the numerator is `i64::MIN`; see [`Fraction::checked_abs`].
    pub fn abs(self) -> Self {
        match self.checked_abs() {
            Ok(result) => result,
            Err(err) => panic!("attempt to take absolute value of fraction: {}", err),
        }
    }

    /// `-1`, `0` or `1` as a fraction
    pub fn signum(self) -> Self {
        Fraction::from_int(self.numerator.signum())
    }

    /// Floor - round toward negative infinity
    pub fn floor(self) -> Self {
        Fraction::from_int(self.to_int())
    }

    /// Ceiling - round toward positive infinity
    pub fn ceil(self) -> Self {
        let quotient = self.numerator.div_euclid(self.denominator);
        if self.numerator.rem_euclid(self.denominator) == 0 {
            Fraction::from_int(quotient)
        } else {
            Fraction::from_int(quotient + 1)
        }
    }

    /// Truncate - round toward zero
    pub fn trunc(self) -> Self {
        Fraction::from_int(self.numerator / self.denominator)
    }

    /// Integer part using floor division.
    ///
    /// Negative values round toward negative infinity, so `-1/3` gives `-1`.
    pub fn to_int(&self) -> i64 {
        // denominator > 0, so the euclidean quotient is the floor
        self.numerator.div_euclid(self.denominator)
    }

    /// Unrounded quotient as a float
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Float rounded to [`DEFAULT_PRECISION`] decimal places, for display
    pub fn to_float(&self) -> f64 {
        self.to_float_with_precision(DEFAULT_PRECISION)
    }

    /// Float rounded to `precision` decimal digits, for display.
    ///
    /// Rounding is applied to the exact binary value of the quotient with
    /// ties to even, so `1/80` (stored just above `0.0125`) gives `0.013`.
    /// A negative `precision` rounds to tens, hundreds and so on.
    pub fn to_float_with_precision(&self, precision: i32) -> f64 {
        let value = self.to_f64();
        if precision >= MAX_FRACTION_DIGITS {
            return value;
        }
        if precision >= 0 {
            return format!("{:.*}", precision as usize, value)
                .parse()
                .unwrap_or(value);
        }
        round_to_multiple(value, 10f64.powi(precision.saturating_neg()))
    }

    /// Canonical `"numerator/denominator"` form
    pub fn to_str(&self) -> String {
        self.to_string()
    }

    /// Mixed-number form such as `"-1 1/2"`.
    ///
    /// Proper fractions and whole numbers keep the simple form so the output
    /// always parses back with [`Fraction::from_string`].
    pub fn to_mixed_string(&self) -> String {
        if self.is_integer() || self.numerator.unsigned_abs() < self.denominator as u64 {
            return self.to_string();
        }
        let whole = self.numerator / self.denominator;
        let remainder = (self.numerator % self.denominator).abs();
        format!("{} {}/{}", whole, remainder, self.denominator)
    }

    fn cross_lt(&self, other: &Self) -> bool {
        let (n1, d1) = self.wide();
        let (n2, d2) = other.wide();
        n1 * d2 < n2 * d1
    }
}

/// Round `value` to the nearest multiple of `scale`, ties to even.
fn round_to_multiple(value: f64, scale: f64) -> f64 {
    // fmod is exact
    let remainder = value % scale;
    let base = value - remainder;
    let away = match remainder.abs().partial_cmp(&(scale / 2.0)) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => (base / scale) % 2.0 != 0.0,
        _ => false,
    };
    if away {
        base + scale.copysign(value)
    } else {
        base
    }
}

/// Greatest common divisor
fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}, {})", self.numerator, self.denominator)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::from_int(n)
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;

    fn try_from((num, den): (i64, i64)) -> Result<Self> {
        Fraction::new(num, den)
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> Self {
        f.to_f64()
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical pairs: identical storage is the only way to be equal
        if self == other {
            Ordering::Equal
        } else if self.cross_lt(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        *self == Fraction::from_int(*other)
    }
}

impl PartialOrd<i64> for Fraction {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Fraction::from_int(*other)))
    }
}
