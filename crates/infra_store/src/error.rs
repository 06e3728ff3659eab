//! Store and codec error types
//!
//! Duplicate keys and invalid values reject a single operation and leave the
//! stores untouched. Codec errors abort the load or save of one file.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use core_kernel::ValidationError;
use domain_claims::ClaimError;
use domain_party::PartyError;

use crate::record::RecordKind;

/// Errors raised while encoding or decoding a record file
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line has the wrong number of columns
    #[error("{kind} line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        kind: RecordKind,
        line: usize,
        expected: String,
        found: usize,
    },

    /// A column could not be parsed
    #[error("{kind} line {line}, column {column}: {reason}")]
    Malformed {
        kind: RecordKind,
        line: usize,
        column: &'static str,
        reason: String,
    },

    /// A field holds a character the file format cannot represent
    #[error("cannot encode {kind} {key}: field {field} contains a delimiter or line break")]
    Unencodable {
        kind: RecordKind,
        key: String,
        field: &'static str,
    },
}

impl CodecError {
    /// Creates an I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodecError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a Malformed error for one column of one line
    pub fn malformed(kind: RecordKind, line: usize, column: &'static str, reason: impl fmt::Display) -> Self {
        CodecError::Malformed {
            kind,
            line,
            column,
            reason: reason.to_string(),
        }
    }

    /// Creates an Unencodable error
    pub fn unencodable(kind: RecordKind, key: impl fmt::Display, field: &'static str) -> Self {
        CodecError::Unencodable {
            kind,
            key: key.to_string(),
            field,
        }
    }

    /// Returns true if the file contents, not the file system, caused the error
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::ColumnCount { .. } | CodecError::Malformed { .. })
    }
}

/// Errors raised by registry operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    /// A record with the same key already exists
    #[error("Duplicate {kind}: {key} already exists")]
    Duplicate { kind: RecordKind, key: String },

    /// A referenced record does not exist
    #[error("{kind} not found: {key}")]
    NotFound { kind: RecordKind, key: String },

    /// The card already belongs to another customer
    #[error("Insurance card {card} is already owned by customer {owner}")]
    CardOwned { card: String, owner: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl StoreError {
    /// Creates a Duplicate error
    pub fn duplicate(kind: RecordKind, key: impl fmt::Display) -> Self {
        StoreError::Duplicate {
            kind,
            key: key.to_string(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(kind: RecordKind, key: impl fmt::Display) -> Self {
        StoreError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    /// Checks if this error rejected a duplicate key
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }

    /// Checks if this error is a field validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::Validation(_)
                | StoreError::Claim(_)
                | StoreError::Party(PartyError::Validation(_))
        )
    }
}
