//! Exact rational numbers in canonical reduced form
//!
//! This crate provides [`Fraction`], an immutable numerator/denominator pair
//! that is reduced on every construction path. Arithmetic, comparison,
//! parsing and float conversion are all defined on that canonical form, so
//! equal values always have identical storage and hash identically.
//!
//! # Examples
//!
//! ```
//! use frac_core::Fraction;
//!
//! let half = Fraction::new(4, 8)?;
//! assert_eq!(half.to_string(), "1/2");
//!
//! let sum = half + Fraction::from_string("1 1/2")?;
//! assert_eq!(sum, Fraction::from_int(2));
//!
//! assert_eq!(Fraction::from_float(0.75)?, Fraction::new(3, 4)?);
//! assert_eq!(half.checked_div(Fraction::ZERO), Err(frac_core::FractionError::DivisionByZero));
//! # Ok::<(), frac_core::FractionError>(())
//! ```
//!
//! # Main Components
//!
//! - **Fraction**: The reduced rational value type
//! - **Operand**: A fraction or an integer on the right-hand side of an operation
//! - **FractionError**: Division by zero, malformed text, unsupported operands
//! - **Approximation**: Continued-fraction conversion from `f64`

pub mod approx;
pub mod arith;
pub mod error;
pub mod fraction;
pub mod parse;


pub use approx::DEFAULT_MAX_DENOMINATOR;
pub use arith::Operand;
pub use error::{FractionError, Result};
pub use fraction::{Fraction, DEFAULT_PRECISION};
