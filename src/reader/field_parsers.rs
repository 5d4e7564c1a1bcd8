//! Field parsing utilities for housing records
//!
//! Converts raw CSV text into typed values. Integer fields distinguish text
//! that is numeric but not integral (a type error) from text that is not a
//! number at all (a parse error).

use crate::constants::columns;
use crate::error::{HousingError, Result};

/// Parse an integer field
///
/// `label` is the human readable field name used in error reasons. Whole
/// numbers that do not fit in an `i64` are a value error, not a type error.
pub fn parse_integer(field: &str, label: &str, value: &str) -> Result<i64> {
    if let Ok(parsed) = value.parse::<i64>() {
        return Ok(parsed);
    }

    if is_integer_literal(value) {
        return Err(HousingError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("{} is out of range", label),
        });
    }

    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Err(HousingError::InvalidType {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("{} must be an integer", label),
        }),
        _ => Err(HousingError::MalformedNumber {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Optional sign followed by decimal digits only
fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a finite floating point field
pub fn parse_float(field: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(HousingError::MalformedNumber {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parse a floor count, rejecting non-integral numbers with a type error
pub fn parse_floor_count(value: &str) -> Result<i64> {
    parse_integer(columns::FLOOR_COUNT, "floor count", value)
}

/// Parse a population, rejecting non-integral numbers with a type error
pub fn parse_population(value: &str) -> Result<i64> {
    parse_integer(columns::POPULATION, "population", value)
}

pub fn parse_area_residential(value: &str) -> Result<f64> {
    parse_float(columns::AREA_RESIDENTIAL, value)
}
