//! Custom Test Assertions
//!
//! Provides assertion helpers that print the offending value, which plain
//! `assert!(matches!(..))` does not.

use infra_store::{LoadWarning, StoreError};

/// Asserts that a result failed with a duplicate-key error
pub fn assert_duplicate<T: std::fmt::Debug>(result: Result<T, StoreError>) {
    match result {
        Err(e) if e.is_duplicate() => {}
        other => panic!("Expected a duplicate-key error, got {other:?}"),
    }
}

/// Asserts that a result failed field validation
pub fn assert_validation_error<T: std::fmt::Debug>(result: Result<T, StoreError>) {
    match result {
        Err(e) if e.is_validation() => {}
        other => panic!("Expected a validation error, got {other:?}"),
    }
}

/// Asserts that a result failed because a record was missing
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, StoreError>) {
    match result {
        Err(StoreError::NotFound { .. }) => {}
        other => panic!("Expected a not-found error, got {other:?}"),
    }
}

/// Asserts that no warnings were raised
pub fn assert_no_warnings(warnings: &[LoadWarning]) {
    assert!(
        warnings.is_empty(),
        "Expected no load warnings, got: {}",
        warnings.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    );
}
