//! Validation error type used across the system

use thiserror::Error;

/// A field value was rejected before it could become part of a record
///
/// Validation errors are always recoverable: the caller decides whether to
/// ask for the value again or abandon the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid claim ID '{0}': expected f- followed by 10 digits")]
    InvalidClaimId(String),

    #[error("Invalid customer ID '{0}': expected c- followed by 7 digits")]
    InvalidCustomerId(String),

    #[error("Invalid card number '{0}': expected exactly 10 digits")]
    InvalidCardNumber(String),

    #[error("Invalid claim status '{0}': expected New, Processing, or Done")]
    InvalidStatus(String),

    #[error("Invalid customer role '{0}': expected policy holder or dependent")]
    InvalidRole(String),

    #[error("Invalid date '{0}': expected a calendar date in YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("Invalid amount '{0}': expected a non-negative decimal")]
    InvalidAmount(String),

    #[error("{0} cannot be blank")]
    BlankField(&'static str),

    #[error("{field} cannot contain digits: '{value}'")]
    ContainsDigit { field: &'static str, value: String },

    #[error("{field} contains a character that cannot be stored: '{value}'")]
    UnstorableCharacter { field: &'static str, value: String },
}

impl ValidationError {
    /// Returns the name of the offending field, when the error carries one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::BlankField(field)
            | ValidationError::ContainsDigit { field, .. }
            | ValidationError::UnstorableCharacter { field, .. } => Some(*field),
            _ => None,
        }
    }
}
