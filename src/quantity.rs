//! # Quantity Module
//!
//! Parses the magnitude part of an ingredient quantity ("2", "1.5", "3/4",
//! "1 1/2") and rounds converted millilitre values for display.
//!
//! ## Rounding
//!
//! Values under 5 ml are rounded to the nearest whole millilitre, everything
//! else to the nearest multiple of 5. Ties round half-up, so `2.5` becomes `3`
//! and `12.5` becomes `15`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Mixed number: "1 1/2"
    static ref MIXED_NUMBER: Regex =
        Regex::new(r"([0-9]+)\s+([0-9]+)/([0-9]+)").expect("Mixed number pattern should be valid");
    /// Simple fraction: "3/4"
    static ref SIMPLE_FRACTION: Regex =
        Regex::new(r"([0-9]+)/([0-9]+)").expect("Fraction pattern should be valid");
}

/// Errors raised while parsing a magnitude token
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// The token is not a number, a fraction or a mixed number
    InvalidNumber(String),
    /// Fraction with a zero denominator
    DivisionByZero(String),
}

impl std::fmt::Display for QuantityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityError::InvalidNumber(token) => write!(f, "Invalid number format: '{token}'"),
            QuantityError::DivisionByZero(token) => {
                write!(f, "Division by zero in fraction: '{token}'")
            }
        }
    }
}

impl std::error::Error for QuantityError {}

/// Parse a magnitude token into a non-negative floating-point value
///
/// Mixed numbers are tried first, then simple fractions, then plain decimal
/// literals.
///
/// # Examples
///
/// ```rust
/// use cocktails::quantity::parse_quantity;
///
/// assert_eq!(parse_quantity("1 1/2").unwrap(), 1.5);
/// assert_eq!(parse_quantity("3/4").unwrap(), 0.75);
/// assert_eq!(parse_quantity("2").unwrap(), 2.0);
/// assert!(parse_quantity("1/0").is_err());
/// ```
pub fn parse_quantity(token: &str) -> Result<f64, QuantityError> {
    let token = token.trim();

    if let Some(captures) = MIXED_NUMBER.captures(token) {
        let whole = parse_integer(&captures[1], token)?;
        let fraction = parse_fraction(&captures[2], &captures[3], token)?;
        return Ok(whole + fraction);
    }

    if let Some(captures) = SIMPLE_FRACTION.captures(token) {
        return parse_fraction(&captures[1], &captures[2], token);
    }

    match token.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(QuantityError::InvalidNumber(token.to_string())),
    }
}

fn parse_integer(digits: &str, token: &str) -> Result<f64, QuantityError> {
    digits
        .parse::<u64>()
        .map(|n| n as f64)
        .map_err(|_| QuantityError::InvalidNumber(token.to_string()))
}

fn parse_fraction(numerator: &str, denominator: &str, token: &str) -> Result<f64, QuantityError> {
    let numerator = parse_integer(numerator, token)?;
    let denominator = parse_integer(denominator, token)?;
    if denominator == 0.0 {
        return Err(QuantityError::DivisionByZero(token.to_string()));
    }
    Ok(numerator / denominator)
}

/// Round a millilitre value for display
///
/// `f64::round` rounds half away from zero, which is half-up for the
/// non-negative values produced by the parser.
pub fn round5(ml: f64) -> f64 {
    if ml < 5.0 {
        ml.round()
    } else {
        (ml / 5.0).round() * 5.0
    }
}
