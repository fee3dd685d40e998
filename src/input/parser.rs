//! Parsing of numbers, counts and number pairs from text

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{ConvertError, ConvertResult};

lazy_static! {
    /// Separator between the two values of a pair: comma, semicolon or whitespace
    static ref PAIR_SEPARATOR: Regex = Regex::new(r"\s*[,;]\s*|\s+").unwrap();
}

/// Parse a finite floating point value for the named field
///
/// Non-numeric text as well as `NaN` and infinities are rejected; nothing is
/// ever coerced to zero.
pub fn parse_number(field: &str, text: &str) -> ConvertResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConvertError::InvalidNumber {
            field: field.to_string(),
            input: trimmed.to_string(),
        }),
    }
}

/// Parse the number of coordinates to collect
pub fn parse_count(text: &str) -> ConvertResult<usize> {
    let trimmed = text.trim();
    trimmed.parse::<usize>()
        .map_err(|_| ConvertError::InvalidCount(trimmed.to_string()))
}

/// Parse a line holding exactly two numbers
///
/// # Arguments
/// * `line` - Text such as `"3, 4"`, `"3;4"` or `"3 4"`
///
/// # Returns
/// The two values in the order they appear
pub fn parse_pair(line: &str) -> ConvertResult<(f64, f64)> {
    let trimmed = line.trim();
    let parts: Vec<&str> = PAIR_SEPARATOR.split(trimmed).collect();
    if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
        return Err(ConvertError::InvalidPair(trimmed.to_string()));
    }

    let first = parts[0].parse::<f64>().ok().filter(|v| v.is_finite());
    let second = parts[1].parse::<f64>().ok().filter(|v| v.is_finite());
    match (first, second) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ConvertError::InvalidPair(trimmed.to_string())),
    }
}
