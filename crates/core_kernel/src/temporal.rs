//! Calendar date handling
//!
//! All dates in the system are plain calendar dates written as `YYYY-MM-DD`.
//! Parsing is strict: the text must have exactly that shape and name a real
//! day, so `2024-02-30` and `2024-2-3` are both rejected.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// chrono format string for stored and entered dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses an entered date
///
/// Blank input is rejected; there is no "no date" answer on this path.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField("date"));
    }
    if !has_date_shape(trimmed) {
        return Err(ValidationError::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parses a date column read from storage
///
/// An empty column is the "no date" marker and decodes to `None`.
pub fn parse_stored_date(value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(value).map(Some)
}

/// Formats a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats an optional date, writing nothing for `None`
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}
