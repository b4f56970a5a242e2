use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractionError>;

/// Failures surfaced by fraction construction, arithmetic and conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractionError {
    #[error("denominator cannot be zero")]
    DivisionByZero,

    #[error("invalid fraction string format: '{input}'")]
    InvalidFormat { input: String },

    #[error("unsupported operand for fraction arithmetic: {kind}")]
    UnsupportedOperand { kind: String },

    #[error("fraction does not fit in a 64-bit integer pair")]
    Overflow,

    #[error("cannot convert non-finite value {value} to a fraction")]
    NonFinite { value: f64 },

    #[error("max denominator should be at least 1, got {value}")]
    InvalidMaxDenominator { value: i64 },
}

impl FractionError {
    pub fn invalid_format(input: impl Into<String>) -> Self {
        FractionError::InvalidFormat {
            input: input.into(),
        }
    }

    pub fn unsupported_operand(kind: impl Into<String>) -> Self {
        FractionError::UnsupportedOperand { kind: kind.into() }
    }
}
