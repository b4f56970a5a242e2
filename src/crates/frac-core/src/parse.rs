use crate::error::{FractionError, Result};
use crate::fraction::Fraction;
use std::str::FromStr;

impl Fraction {
    /// Parse `"N/D"` or the mixed form `"W N/D"`.
    ///
    /// Surrounding whitespace is ignored. The mixed form is
    /// `|W| * D + N` over `D`, negated when `W` is negative. Both forms
    /// reduce through [`Fraction::new`], so a zero denominator is reported as
    /// [`FractionError::DivisionByZero`] rather than a format error.
    pub fn from_string(text: &str) -> Result<Self> {
        let trimmed = text.trim();

        if trimmed.contains(char::is_whitespace) {
            let mut fields = trimmed.split_whitespace();
            let (whole, simple) = match (fields.next(), fields.next(), fields.next()) {
                (Some(whole), Some(simple), None) => (whole, simple),
                _ => return Err(FractionError::invalid_format(text)),
            };
            let whole = parse_int(whole, text)?;
            let (numerator, denominator) = split_simple(simple, text)?;

            let magnitude = whole.unsigned_abs() as i128 * denominator as i128 + numerator as i128;
            let numerator = if whole < 0 { -magnitude } else { magnitude };
            Fraction::from_wide(numerator, denominator as i128)
        } else if trimmed.contains('/') {
            let (numerator, denominator) = split_simple(trimmed, text)?;
            Fraction::new(numerator, denominator)
        } else {
            Err(FractionError::invalid_format(text))
        }
    }
}

fn split_simple(field: &str, input: &str) -> Result<(i64, i64)> {
    let (numerator, denominator) = field
        .split_once('/')
        .ok_or_else(|| FractionError::invalid_format(input))?;
    Ok((parse_int(numerator, input)?, parse_int(denominator, input)?))
}

fn parse_int(field: &str, input: &str) -> Result<i64> {
    field
        .parse()
        .map_err(|_| FractionError::invalid_format(input))
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        Fraction::from_string(s)
    }
}
