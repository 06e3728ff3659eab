//! Tests for strict date parsing

use chrono::NaiveDate;
use core_kernel::{format_optional_date, parse_date, parse_stored_date, ValidationError};

#[test]
fn test_leap_day_accepted() {
    assert_eq!(
        parse_date("2024-02-29").unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
}

#[test]
fn test_no_rollover() {
    assert_eq!(
        parse_date("2024-02-30"),
        Err(ValidationError::InvalidDate("2024-02-30".to_string()))
    );
    assert!(parse_date("2023-02-29").is_err());
    assert!(parse_date("2024-13-01").is_err());
}

#[test]
fn test_lenient_shapes_rejected() {
    assert!(parse_date("2024-2-3").is_err());
    assert!(parse_date("24-02-03").is_err());
    assert!(parse_date("2024-02-03T00:00").is_err());
}

#[test]
fn test_blank_entry_rejected() {
    assert_eq!(parse_date(""), Err(ValidationError::BlankField("date")));
    assert_eq!(parse_date("   "), Err(ValidationError::BlankField("date")));
}

#[test]
fn test_blank_stored_column_is_absent() {
    assert_eq!(parse_stored_date("").unwrap(), None);
}

#[test]
fn test_stored_column_still_strict() {
    assert!(parse_stored_date("2024-02-30").is_err());
    assert_eq!(
        parse_stored_date("2024-01-15").unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
}

#[test]
fn test_absent_date_formats_empty() {
    assert_eq!(format_optional_date(None), "");
}
