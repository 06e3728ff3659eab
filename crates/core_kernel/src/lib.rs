//! Core Kernel - Foundational types for the insurance records system
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Strongly-typed record keys (claim IDs, customer IDs, card numbers)
//! - Pure field validators applied before a record is accepted
//! - Strict `YYYY-MM-DD` date parsing and formatting
//!
//! Nothing in this crate performs I/O. Every validator is total over string
//! input: it returns a verdict or a [`ValidationError`], it never panics.

pub mod error;
pub mod identifiers;
pub mod temporal;
pub mod validation;

pub use error::ValidationError;
pub use identifiers::{CardNumber, ClaimId, CustomerId};
pub use temporal::{format_date, format_optional_date, parse_date, parse_stored_date, DATE_FORMAT};
pub use validation::{
    contains_digit, is_valid_card_number, is_valid_claim_id, is_valid_customer_id,
    is_valid_status,
};
