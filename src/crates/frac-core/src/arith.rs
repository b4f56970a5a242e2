//! Arithmetic between fractions and integers.
//!
//! The `checked_*` methods report failures as [`FractionError`]. The
//! operator traits follow the primitive integer operators and panic on the
//! same conditions (division by zero, overflow).

use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use serde_json::Value as JsonValue;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Right-hand side of a fraction operation: another fraction or an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Fraction(Fraction),
    Integer(i64),
}

impl Operand {
    /// Integers become `k/1`
    pub fn into_fraction(self) -> Fraction {
        match self {
            Operand::Fraction(f) => f,
            Operand::Integer(k) => Fraction::from_int(k),
        }
    }

    /// Coerce a dynamically typed JSON value.
    ///
    /// Integers and fraction strings are accepted, as are objects carrying
    /// `numerator` and `denominator`. Everything else is unsupported.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Number(n) => match n.as_i64() {
                Some(k) => Ok(Operand::Integer(k)),
                None if n.is_f64() => Err(FractionError::unsupported_operand("float")),
                None => Err(FractionError::Overflow),
            },
            JsonValue::String(s) => Fraction::from_string(s).map(Operand::Fraction),
            JsonValue::Object(map) => {
                let field = |name: &str| map.get(name).and_then(JsonValue::as_i64);
                match (field("numerator"), field("denominator")) {
                    (Some(n), Some(d)) => Fraction::new(n, d).map(Operand::Fraction),
                    _ => Err(FractionError::unsupported_operand("object")),
                }
            }
            JsonValue::Bool(_) => Err(FractionError::unsupported_operand("boolean")),
            JsonValue::Array(_) => Err(FractionError::unsupported_operand("array")),
            JsonValue::Null => Err(FractionError::unsupported_operand("null")),
        }
    }
}

impl From<Fraction> for Operand {
    fn from(f: Fraction) -> Self {
        Operand::Fraction(f)
    }
}

impl From<&Fraction> for Operand {
    fn from(f: &Fraction) -> Self {
        Operand::Fraction(*f)
    }
}

impl From<i64> for Operand {
    fn from(k: i64) -> Self {
        Operand::Integer(k)
    }
}

impl FromStr for Operand {
    type Err = FractionError;

    /// `"3"` is an integer, `"3/4"` and `"1 1/2"` are fractions. Anything
    /// else that reads as a float (`"0.5"`, `"1e5"`, `"inf"`) is unsupported.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(k) = trimmed.parse::<i64>() {
            return Ok(Operand::Integer(k));
        }
        if trimmed.parse::<f64>().is_ok() {
            return Err(FractionError::unsupported_operand("float"));
        }
        Fraction::from_string(trimmed).map(Operand::Fraction)
    }
}

impl Fraction {
    pub fn checked_add(self, rhs: impl Into<Operand>) -> Result<Fraction> {
        let (n1, d1) = self.wide();
        let (n2, d2) = rhs.into().into_fraction().wide();
        Fraction::from_wide(n1 * d2 + n2 * d1, d1 * d2)
    }

    pub fn checked_sub(self, rhs: impl Into<Operand>) -> Result<Fraction> {
        let (n1, d1) = self.wide();
        let (n2, d2) = rhs.into().into_fraction().wide();
        Fraction::from_wide(n1 * d2 - n2 * d1, d1 * d2)
    }

    pub fn checked_mul(self, rhs: impl Into<Operand>) -> Result<Fraction> {
        let (n1, d1) = self.wide();
        let (n2, d2) = rhs.into().into_fraction().wide();
        Fraction::from_wide(n1 * n2, d1 * d2)
    }

    /// Fails with [`FractionError::DivisionByZero`] when `rhs` is zero
    pub fn checked_div(self, rhs: impl Into<Operand>) -> Result<Fraction> {
        let rhs = rhs.into().into_fraction();
        if rhs.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let (n1, d1) = self.wide();
        let (n2, d2) = rhs.wide();
        Fraction::from_wide(n1 * d2, d1 * n2)
    }

    /// Only fails for a numerator of `i64::MIN`
    pub fn checked_neg(self) -> Result<Fraction> {
        let (n, d) = self.wide();
        Fraction::from_wide(-n, d)
    }

    /// Only fails for a numerator of `i64::MIN`
    pub fn checked_abs(self) -> Result<Fraction> {
        let (n, d) = self.wide();
        Fraction::from_wide(n.abs(), d)
    }
}

macro_rules! fraction_binop {
    ($Trait:ident, $method:ident, $checked:ident, $verb:literal) => {
        impl $Trait<Operand> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Operand) -> Fraction {
                match self.$checked(rhs) {
                    Ok(result) => result,
                    Err(err) => panic!("attempt to {} fractions: {}", $verb, err),
                }
            }
        }

        impl $Trait for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                $Trait::$method(self, Operand::Fraction(rhs))
            }
        }

        impl $Trait<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                $Trait::$method(self, Operand::Fraction(*rhs))
            }
        }

        impl $Trait<i64> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: i64) -> Fraction {
                $Trait::$method(self, Operand::Integer(rhs))
            }
        }

        impl $Trait<Fraction> for i64 {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                $Trait::$method(Fraction::from_int(self), Operand::Fraction(rhs))
            }
        }
    };
}

fraction_binop!(Add, add, checked_add, "add");
fraction_binop!(Sub, sub, checked_sub, "subtract");
fraction_binop!(Mul, mul, checked_mul, "multiply");
fraction_binop!(Div, div, checked_div, "divide");

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        match self.checked_neg() {
            Ok(result) => result,
            Err(err) => panic!("attempt to negate fraction: {}", err),
        }
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ZERO, |acc, f| acc + f)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ZERO, |acc, f| acc + f)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ONE, |acc, f| acc * f)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ONE, |acc, f| acc * f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_fraction_addition() {
        assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
        assert_eq!(frac(1, 2) + frac(1, 2), Fraction::ONE);
        assert_eq!(frac(2, 2) + frac(4, 8), frac(3, 2));
    }

    #[test]
    fn test_fraction_subtraction() {
        assert_eq!(frac(2, 2) - frac(4, 8), frac(1, 2));
        assert_eq!(frac(1, 3) - frac(1, 2), frac(-1, 6));
    }

    #[test]
    fn test_fraction_multiplication() {
        assert_eq!(frac(2, 3) * frac(3, 4), frac(1, 2));
        assert_eq!(frac(-2, 3) * frac(-3, 4), frac(1, 2));
    }

    #[test]
    fn test_fraction_division() {
        assert_eq!(frac(1, 2) / frac(1, 4), frac(2, 1));
        assert_eq!(frac(2, 2) / frac(4, 8), frac(2, 1));
        assert_eq!(frac(1, 2) / frac(-1, 4), frac(-2, 1));
    }

    #[test]
    fn test_division_by_zero_fraction() {
        assert_eq!(
            frac(1, 2).checked_div(frac(0, 5)),
            Err(FractionError::DivisionByZero)
        );
        assert_eq!(frac(1, 2).checked_div(0i64), Err(FractionError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "attempt to divide fractions")]
    fn test_division_operator_panics_on_zero() {
        let _ = frac(1, 2) / frac(0, 5);
    }

    #[test]
    fn test_integer_operands() {
        assert_eq!(frac(1, 2) + 1, frac(3, 2));
        assert_eq!(frac(1, 2) - 1, frac(-1, 2));
        assert_eq!(frac(1, 2) * 4, Fraction::from_int(2));
        assert_eq!(frac(1, 2) / 2, frac(1, 4));
        assert_eq!(3 - frac(1, 2), frac(5, 2));
        assert_eq!(1 / frac(2, 3), frac(3, 2));
    }

    #[test]
    fn test_operands_untouched() {
        let a = frac(1, 2);
        let b = frac(1, 3);
        let _ = a + b;
        let _ = a * &b;
        assert_eq!(a, frac(1, 2));
        assert_eq!(b, frac(1, 3));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-frac(1, 3), frac(-1, 3));
        assert_eq!(-Fraction::ZERO, Fraction::ZERO);
        assert_eq!(
            Fraction::from_int(i64::MIN).checked_neg(),
            Err(FractionError::Overflow)
        );
    }

    #[test]
    fn test_checked_abs() {
        assert_eq!(frac(-3, 9).checked_abs(), Ok(frac(1, 3)));
        assert_eq!(frac(2, 5).checked_abs(), Ok(frac(2, 5)));
        assert_eq!(
            Fraction::from_int(i64::MIN).checked_abs(),
            Err(FractionError::Overflow)
        );
    }

    #[test]
    fn test_wide_intermediates_reduce_into_range() {
        let big = frac(i64::MAX, 2);
        assert_eq!(big * frac(2, i64::MAX), Fraction::ONE);
        assert_eq!(big - big, Fraction::ZERO);
        assert_eq!(
            Fraction::from_int(i64::MAX).checked_add(1i64),
            Err(FractionError::Overflow)
        );
    }

    #[test]
    fn test_sum_and_product() {
        let parts = [frac(1, 2), frac(1, 3), frac(1, 6)];
        assert_eq!(parts.iter().sum::<Fraction>(), Fraction::ONE);
        assert_eq!(parts.into_iter().product::<Fraction>(), frac(1, 36));
        assert_eq!(Vec::<Fraction>::new().into_iter().sum::<Fraction>(), Fraction::ZERO);
    }

    #[test]
    fn test_operand_from_str() {
        assert_eq!("7".parse::<Operand>(), Ok(Operand::Integer(7)));
        assert_eq!(" -3/9 ".parse::<Operand>(), Ok(Operand::Fraction(frac(-1, 3))));
        assert_eq!("1 1/2".parse::<Operand>(), Ok(Operand::Fraction(frac(3, 2))));
        assert_eq!(
            "0.5".parse::<Operand>(),
            Err(FractionError::unsupported_operand("float"))
        );
        for token in ["1e5", "inf", "-2.5E-3", "NaN"] {
            assert_eq!(
                token.parse::<Operand>(),
                Err(FractionError::unsupported_operand("float")),
                "{}",
                token
            );
        }
        assert!(matches!(
            "abc".parse::<Operand>(),
            Err(FractionError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_operand_from_json() {
        assert_eq!(Operand::from_json(&json!(4)), Ok(Operand::Integer(4)));
        assert_eq!(
            Operand::from_json(&json!("3/4")),
            Ok(Operand::Fraction(frac(3, 4)))
        );
        assert_eq!(
            Operand::from_json(&json!({"numerator": 2, "denominator": 4})),
            Ok(Operand::Fraction(frac(1, 2)))
        );
        assert_eq!(
            Operand::from_json(&json!(0.5)),
            Err(FractionError::unsupported_operand("float"))
        );
        assert_eq!(
            Operand::from_json(&json!(true)),
            Err(FractionError::unsupported_operand("boolean"))
        );
        assert_eq!(
            Operand::from_json(&json!(null)),
            Err(FractionError::unsupported_operand("null"))
        );
        assert_eq!(
            Operand::from_json(&json!({"denominator": 0, "numerator": 1})),
            Err(FractionError::DivisionByZero)
        );
    }
}
