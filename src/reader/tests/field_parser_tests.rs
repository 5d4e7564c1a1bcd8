//! Tests for typed field coercion

use crate::error::{ErrorKind, HousingError};
use crate::reader::field_parsers::*;

#[test]
fn test_parse_floor_count_integer() {
    assert_eq!(parse_floor_count("9").unwrap(), 9);
    assert_eq!(parse_floor_count("-3").unwrap(), -3);
}

#[test]
fn test_parse_floor_count_fractional_is_type_error() {
    let err = parse_floor_count("3.5").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    match err {
        HousingError::InvalidType { reason, .. } => {
            assert_eq!(reason, "floor count must be an integer");
        }
        other => panic!("Expected InvalidType, got {:?}", other),
    }
}

#[test]
fn test_parse_floor_count_text_is_parse_error() {
    assert_eq!(parse_floor_count("nine").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(parse_floor_count("").unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn test_parse_population_fractional_is_type_error() {
    let err = parse_population("12.5").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(err.to_string().contains("population must be an integer"));
}

#[test]
fn test_parse_area_residential() {
    assert_eq!(parse_area_residential("123.25").unwrap(), 123.25);
    assert_eq!(parse_area_residential("80").unwrap(), 80.0);
    assert_eq!(parse_area_residential("big").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(parse_area_residential("NaN").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(parse_area_residential("inf").unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn test_oversized_whole_numbers_are_out_of_range() {
    let err = parse_population("10000000000000000000").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(err.to_string().contains("population is out of range"));

    let err = parse_floor_count("99999999999999999999").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(err.to_string().contains("floor count is out of range"));

    assert_eq!(
        parse_floor_count("-99999999999999999999").unwrap_err().kind(),
        ErrorKind::Value
    );
}

#[test]
fn test_integer_limits_still_parse() {
    assert_eq!(parse_population("9223372036854775807").unwrap(), i64::MAX);
    assert_eq!(parse_floor_count("+12").unwrap(), 12);
}

#[test]
fn test_exponent_and_decimal_forms_are_type_errors() {
    assert_eq!(parse_floor_count("1e3").unwrap_err().kind(), ErrorKind::Type);
    assert_eq!(parse_floor_count("5.0").unwrap_err().kind(), ErrorKind::Type);
    assert_eq!(parse_floor_count("+").unwrap_err().kind(), ErrorKind::Parse);
}
