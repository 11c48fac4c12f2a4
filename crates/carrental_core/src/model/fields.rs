//! Coercion of raw console fields into typed record drafts.
//!
//! # Invariants
//! - Text fields are kept verbatim.
//! - Decimal fields accept surrounding whitespace and reject anything that is
//!   not a finite number.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to turn raw input fields into a typed draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Caller supplied a different number of fields than the record has.
    FieldCount { expected: usize, actual: usize },
    /// A decimal field could not be parsed.
    NotANumber { field: &'static str, value: String },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount { expected, actual } => {
                write!(f, "expected {expected} fields, got {actual}")
            }
            Self::NotANumber { field, value } => {
                write!(f, "{field} must be a number, got `{value}`")
            }
        }
    }
}

impl Error for FieldError {}

/// Builds a typed draft from an ordered list of raw text fields.
pub trait FromFields: Sized {
    /// Number of fields, in prompt/column order.
    const FIELD_COUNT: usize;

    fn from_fields(fields: &[String]) -> Result<Self, FieldError>;
}

pub(crate) fn expect_field_count(fields: &[String], expected: usize) -> Result<(), FieldError> {
    if fields.len() != expected {
        return Err(FieldError::FieldCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(())
}

pub(crate) fn parse_decimal(field: &'static str, value: &str) -> Result<f64, FieldError> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(FieldError::NotANumber {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{expect_field_count, parse_decimal, FieldError};

    #[test]
    fn parse_decimal_accepts_padded_numbers() {
        assert_eq!(parse_decimal("price", " 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_decimal("price", "7").unwrap(), 7.0);
    }

    #[test]
    fn parse_decimal_rejects_text_and_non_finite_values() {
        for raw in ["abc", "", "1,5", "NaN", "inf"] {
            let err = parse_decimal("price", raw).unwrap_err();
            assert!(
                matches!(err, FieldError::NotANumber { field: "price", .. }),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn field_count_mismatch_is_reported() {
        let fields = vec!["only".to_string()];
        let err = expect_field_count(&fields, 3).unwrap_err();
        assert_eq!(
            err,
            FieldError::FieldCount {
                expected: 3,
                actual: 1
            }
        );
        assert_eq!(err.to_string(), "expected 3 fields, got 1");
    }
}
