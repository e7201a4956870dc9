//! Parsing of user-entered tolerances.
//!
//! Tolerances arrive as free-form text, either a decimal literal (`"0.001"`,
//! `"1e-4"`) or the power-of-ten shorthand `"10^-k"`, optionally written with
//! a leading `x` as in `"x10^-4"`.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Tolerance used when no valid tolerance is supplied.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Errors that can occur when parsing a tolerance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseToleranceError {
    #[error("invalid power-of-ten exponent: {0}")]
    Exponent(#[source] ParseIntError),

    #[error("invalid decimal tolerance: {0}")]
    Decimal(#[source] ParseFloatError),
}

/// Parses a tolerance from text.
///
/// The shorthand only needs to match at the very start of the text, so
/// trailing characters after the exponent digits are ignored (`"10^-4 tol"` is
/// `1e-4`) while leading whitespace disables it (`" 10^-4"` is an error).
/// Decimal literals may be surrounded by whitespace.
///
/// # Errors
///
/// Returns an error if the text is neither shorthand nor a decimal literal.
pub fn parse(text: &str) -> Result<f64, ParseToleranceError> {
    if let Some(exponent) = shorthand_exponent(text) {
        let exponent: i32 = exponent.parse().map_err(ParseToleranceError::Exponent)?;
        return Ok(10_f64.powi(exponent));
    }

    text.trim().parse().map_err(ParseToleranceError::Decimal)
}

/// Parses a tolerance, falling back to [`DEFAULT_TOLERANCE`].
///
/// The fallback also applies when the parsed value is not a finite positive
/// number, since no solver accepts such a tolerance.
#[must_use]
pub fn parse_or_default(text: &str) -> f64 {
    match parse(text) {
        Ok(tolerance) if tolerance.is_finite() && tolerance > 0.0 => tolerance,
        _ => DEFAULT_TOLERANCE,
    }
}

/// Returns the signed exponent digits of a `10^k` or `x10^k` prefix.
fn shorthand_exponent(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('x').unwrap_or(text);
    let rest = rest.strip_prefix("10^")?;

    let sign_len = usize::from(rest.starts_with('-'));
    let digits_len = rest[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    (digits_len > 0).then(|| &rest[..sign_len + digits_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_decimal_literals() {
        assert_relative_eq!(parse("0.001").unwrap(), 1e-3);
        assert_relative_eq!(parse("1e-8").unwrap(), 1e-8);
        assert_relative_eq!(parse("  2.5e-3 ").unwrap(), 2.5e-3);
    }

    #[test]
    fn parses_power_of_ten_shorthand() {
        assert_relative_eq!(parse("10^-4").unwrap(), 1e-4);
        assert_relative_eq!(parse("x10^-7").unwrap(), 1e-7);
        assert_relative_eq!(parse("10^2").unwrap(), 100.0);
    }

    #[test]
    fn shorthand_ignores_trailing_text() {
        assert_relative_eq!(parse("10^-5 please").unwrap(), 1e-5);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse("tiny"),
            Err(ParseToleranceError::Decimal(_))
        ));
        assert!(matches!(parse(""), Err(ParseToleranceError::Decimal(_))));
        // `10^` without digits is not shorthand, and not a decimal either.
        assert!(matches!(
            parse("10^-"),
            Err(ParseToleranceError::Decimal(_))
        ));
    }

    #[test]
    fn shorthand_must_start_the_text() {
        assert!(matches!(
            parse(" 10^-4"),
            Err(ParseToleranceError::Decimal(_))
        ));
        assert_relative_eq!(parse_or_default(" 10^-4"), DEFAULT_TOLERANCE);
        assert_relative_eq!(parse("10^-4 ").unwrap(), 1e-4);
    }

    #[test]
    fn rejects_out_of_range_exponent() {
        assert!(matches!(
            parse("10^-99999999999"),
            Err(ParseToleranceError::Exponent(_))
        ));
    }

    #[test]
    fn parse_or_default_falls_back() {
        assert_relative_eq!(parse_or_default("10^-3"), 1e-3);
        assert_relative_eq!(parse_or_default("abc"), DEFAULT_TOLERANCE);
        assert_relative_eq!(parse_or_default("-0.1"), DEFAULT_TOLERANCE);
        assert_relative_eq!(parse_or_default("0"), DEFAULT_TOLERANCE);
        assert_relative_eq!(parse_or_default("inf"), DEFAULT_TOLERANCE);
        // Underflows to zero.
        assert_relative_eq!(parse_or_default("10^-400"), DEFAULT_TOLERANCE);
    }
}
