//! Field validators
//!
//! Pure checks applied to raw field text before a record is accepted. The
//! `is_valid_*` predicates answer yes or no; the `validate_*` helpers return
//! the normalized value or the reason it was rejected.

use crate::error::ValidationError;

/// Prefix of every claim identifier
pub const CLAIM_ID_PREFIX: &str = "f-";
/// Number of digits following the claim prefix
pub const CLAIM_ID_DIGITS: usize = 10;
/// Prefix of every customer identifier
pub const CUSTOMER_ID_PREFIX: &str = "c-";
/// Number of digits following the customer prefix
pub const CUSTOMER_ID_DIGITS: usize = 7;
/// Number of digits in an insurance card number
pub const CARD_NUMBER_DIGITS: usize = 10;

/// Canonical claim status labels, in lifecycle order
pub const CLAIM_STATUS_LABELS: [&str; 3] = ["New", "Processing", "Done"];

/// Column delimiter of the flat-file format
pub const FIELD_DELIMITER: char = ',';
/// Delimiter between values of a multi-valued column
pub const VALUE_DELIMITER: char = ';';

fn exact_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

fn prefixed_digits(value: &str, prefix: &str, count: usize) -> bool {
    value
        .strip_prefix(prefix)
        .is_some_and(|rest| exact_digits(rest, count))
}

/// True iff `value` is `f-` followed by exactly 10 digits
pub fn is_valid_claim_id(value: &str) -> bool {
    prefixed_digits(value, CLAIM_ID_PREFIX, CLAIM_ID_DIGITS)
}

/// True iff `value` is `c-` followed by exactly 7 digits
pub fn is_valid_customer_id(value: &str) -> bool {
    prefixed_digits(value, CUSTOMER_ID_PREFIX, CUSTOMER_ID_DIGITS)
}

/// True iff `value` is exactly 10 digits
pub fn is_valid_card_number(value: &str) -> bool {
    exact_digits(value, CARD_NUMBER_DIGITS)
}

/// True iff `value` case-insensitively equals New, Processing, or Done
pub fn is_valid_status(value: &str) -> bool {
    CLAIM_STATUS_LABELS
        .iter()
        .any(|label| label.eq_ignore_ascii_case(value))
}

/// True iff any character of `value` is a decimal digit
pub fn contains_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// Trims `value` and rejects it when nothing is left
pub fn require_not_blank<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(trimmed)
}

/// Validates a free-text column that may be empty
///
/// The value must not contain the column delimiter or a line break, since
/// neither can be represented in a stored record.
pub fn validate_free_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.contains(FIELD_DELIMITER) || has_line_break(trimmed) {
        return Err(ValidationError::UnstorableCharacter {
            field,
            value: trimmed.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Validates a person name: non-blank, no digits, storable
pub fn validate_person_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = require_not_blank(field, value)?;
    if contains_digit(trimmed) {
        return Err(ValidationError::ContainsDigit {
            field,
            value: trimmed.to_string(),
        });
    }
    validate_free_text(field, trimmed)
}

/// Validates one document reference of a claim
///
/// Document references share a column, so the value delimiter is forbidden
/// in addition to the column delimiter.
pub fn validate_document_reference(value: &str) -> Result<String, ValidationError> {
    let trimmed = require_not_blank("document reference", value)?;
    if trimmed.contains(VALUE_DELIMITER) {
        return Err(ValidationError::UnstorableCharacter {
            field: "document reference",
            value: trimmed.to_string(),
        });
    }
    validate_free_text("document reference", trimmed)
}
