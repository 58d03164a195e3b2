//! Normalization of stored decimal numbers into JSON numbers.
//!
//! The table stores numbers as decimal text. A value whose text has a
//! fractional point is emitted as a float, anything else as an integer, so a
//! stored `3` reads back as `3` and never as `3.0`. Plain integer text keeps
//! every digit, including values wider than 64 bits.

use serde_json::Number;

use crate::storage::{RepositoryError, Result};

/// Largest integer magnitude an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Converts stored decimal text into a JSON number.
///
/// Returns [`RepositoryError::Serialization`] when the text is not a finite
/// number.
///
/// # Examples
///
/// ```
/// use itemtable_core::items::normalize_number;
///
/// assert_eq!(normalize_number("3").unwrap().to_string(), "3");
/// assert_eq!(normalize_number("3.5").unwrap().to_string(), "3.5");
/// ```
pub fn normalize_number(text: &str) -> Result<Number> {
    let text = text.trim();

    if text.contains('.') {
        return parse_float(text);
    }

    if let Ok(value) = text.parse::<i64>() {
        return Ok(Number::from(value));
    }
    if let Ok(value) = text.parse::<u64>() {
        return Ok(Number::from(value));
    }
    if is_integer_text(text) {
        return exact_integer(text);
    }

    // Exponent notation such as `1E+2` has no point but may still be integral.
    let value = parse_finite(text)?;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        Ok(Number::from(value as i64))
    } else {
        Number::from_f64(value).ok_or_else(|| not_serializable(text))
    }
}

fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Builds a number from integer text wider than `u64` without rounding.
fn exact_integer(text: &str) -> Result<Number> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = digits.trim_start_matches('0');
    format!("{sign}{digits}")
        .parse::<Number>()
        .map_err(|_| not_serializable(text))
}

fn parse_float(text: &str) -> Result<Number> {
    let value = parse_finite(text)?;
    Number::from_f64(value).ok_or_else(|| not_serializable(text))
}

fn parse_finite(text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(not_serializable(text)),
    }
}

fn not_serializable(text: &str) -> RepositoryError {
    RepositoryError::Serialization(format!("Number '{text}' is not JSON serializable"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_value_stays_integer() {
        let number = normalize_number("3").unwrap();

        assert!(number.is_i64());
        assert_eq!(number.to_string(), "3");
    }

    #[test]
    fn test_fractional_value_becomes_float() {
        let number = normalize_number("3.5").unwrap();

        assert!(number.is_f64());
        assert_eq!(number.as_f64(), Some(3.5));
    }

    #[test]
    fn test_point_forces_float_even_when_integral() {
        let number = normalize_number("2.0").unwrap();

        assert!(number.is_f64());
        assert_eq!(number.to_string(), "2.0");
    }

    #[test]
    fn test_negative_integer() {
        assert_eq!(normalize_number("-17").unwrap().as_i64(), Some(-17));
    }

    #[test]
    fn test_large_unsigned_integer() {
        let number = normalize_number("18446744073709551615").unwrap();

        assert_eq!(number.as_u64(), Some(u64::MAX));
    }

    #[test]
    fn test_integer_wider_than_u64_keeps_every_digit() {
        let text = "12345678901234567890123456789012345678";

        let number = normalize_number(text).unwrap();

        assert!(!number.is_f64());
        assert_eq!(number.to_string(), text);
    }

    #[test]
    fn test_negative_integer_wider_than_i64_keeps_every_digit() {
        let number = normalize_number("-99999999999999999999999").unwrap();

        assert_eq!(number.to_string(), "-99999999999999999999999");
    }

    #[test]
    fn test_exponent_without_point_is_integer() {
        let number = normalize_number("1E+2").unwrap();

        assert_eq!(number.as_i64(), Some(100));
    }

    #[test]
    fn test_exponent_with_fraction_is_float() {
        let number = normalize_number("1E-2").unwrap();

        assert_eq!(number.as_f64(), Some(0.01));
    }

    #[test]
    fn test_non_numeric_text_is_an_error() {
        let err = normalize_number("abc").unwrap_err();

        assert_eq!(
            err,
            RepositoryError::Serialization("Number 'abc' is not JSON serializable".to_string())
        );
    }

    #[test]
    fn test_non_finite_values_are_errors() {
        assert!(normalize_number("NaN").is_err());
        assert!(normalize_number("inf").is_err());
        assert!(normalize_number("1e400").is_err());
    }
}
