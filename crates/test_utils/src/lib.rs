//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! insurance records test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common records
//! - `builders`: Builder patterns for test data construction
//! - `workspace`: Temporary data directories for file round trips
//! - `assertions`: Custom assertion helpers for store results
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod workspace;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use workspace::*;
