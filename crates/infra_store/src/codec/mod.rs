//! Line-oriented codec for the record files
//!
//! Each record type has a [`LineCodec`] describing its fixed column order.
//! [`decode`] and [`encode`] implement the rules shared by every file:
//!
//! - blank lines are ignored
//! - a line whose key fails validation is skipped with a warning
//! - a line repeating an earlier key is skipped with a warning; the first wins
//! - any other unparseable column aborts the whole file
//! - absent optional values are written as empty columns
//! - multi-valued columns join their values with `;`

mod card;
mod claim;
mod customer;

pub use card::CardCodec;
pub use claim::ClaimCodec;
pub use customer::CustomerCodec;

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use core_kernel::validation::{FIELD_DELIMITER, VALUE_DELIMITER};
use core_kernel::{CustomerId, ValidationError};

use crate::error::CodecError;
use crate::record::{Record, RecordKind};

/// Fixed column layout of one record type
pub trait LineCodec {
    /// Record type this codec reads and writes
    type Record: Record;

    /// Accepted column counts
    const COLUMNS: RangeInclusive<usize>;

    /// Parses the leading key column
    fn parse_key(column: &str) -> Result<<Self::Record as Record>::Key, ValidationError>;

    /// Builds a record from a line whose key has already been accepted
    fn decode_columns(
        key: <Self::Record as Record>::Key,
        columns: &[&str],
        line: usize,
    ) -> Result<Self::Record, CodecError>;

    /// Writes one record as a line, without the line terminator
    fn encode_record(record: &Self::Record) -> Result<String, CodecError>;
}

/// A non-fatal problem found while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file does not exist yet; it was treated as empty
    MissingFile { kind: RecordKind, path: PathBuf },
    /// A line repeated a key seen earlier in the same file
    DuplicateKey { kind: RecordKind, line: usize, key: String },
    /// A line's key failed validation
    InvalidKey { kind: RecordKind, line: usize, reason: ValidationError },
    /// A policy holder lists a dependent that does not exist
    DanglingDependent { holder: CustomerId, dependent: CustomerId },
    /// Two customers name the same card; the later one keeps its own copy
    SharedCard { card: String, owner: String, customer: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::MissingFile { kind, path } => {
                write!(f, "{} file {} not found, starting empty", kind, path.display())
            }
            LoadWarning::DuplicateKey { kind, line, key } => {
                write!(f, "{} line {}: duplicate key {} skipped", kind, line, key)
            }
            LoadWarning::InvalidKey { kind, line, reason } => {
                write!(f, "{} line {}: {}; line skipped", kind, line, reason)
            }
            LoadWarning::DanglingDependent { holder, dependent } => {
                write!(f, "customer {} lists unknown dependent {}", holder, dependent)
            }
            LoadWarning::SharedCard { card, owner, customer } => {
                write!(f, "card {} is owned by {} but also listed for {}", card, owner, customer)
            }
        }
    }
}

/// Records decoded from one file, with the warnings raised along the way
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<R> {
    pub records: Vec<R>,
    pub warnings: Vec<LoadWarning>,
}

impl<R> Default for Decoded<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Decodes every line of `text`
pub fn decode<C: LineCodec>(text: &str) -> Result<Decoded<C::Record>, CodecError> {
    let kind = <C::Record as Record>::KIND;
    let mut seen = BTreeSet::new();
    let mut decoded = Decoded::default();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = raw.split(FIELD_DELIMITER).map(str::trim).collect();
        if !C::COLUMNS.contains(&columns.len()) {
            return Err(CodecError::ColumnCount {
                kind,
                line,
                expected: describe_columns(&C::COLUMNS),
                found: columns.len(),
            });
        }

        let key = match C::parse_key(columns[0]) {
            Ok(key) => key,
            Err(reason) => {
                tracing::warn!(%kind, line, %reason, "Skipping line with invalid key");
                decoded.warnings.push(LoadWarning::InvalidKey { kind, line, reason });
                continue;
            }
        };

        if !seen.insert(key.clone()) {
            tracing::warn!(%kind, line, %key, "Skipping duplicate key");
            decoded.warnings.push(LoadWarning::DuplicateKey {
                kind,
                line,
                key: key.to_string(),
            });
            continue;
        }

        decoded.records.push(C::decode_columns(key, &columns, line)?);
    }

    Ok(decoded)
}

/// Encodes `records`, one line each
///
/// The whole text is produced before anything is written, so an encoding
/// failure never leaves a half-written file behind.
pub fn encode<'a, C, I>(records: I) -> Result<String, CodecError>
where
    C: LineCodec,
    C::Record: 'a,
    I: IntoIterator<Item = &'a C::Record>,
{
    let mut text = String::new();
    for record in records {
        text.push_str(&C::encode_record(record)?);
        text.push('\n');
    }
    Ok(text)
}

fn describe_columns(columns: &RangeInclusive<usize>) -> String {
    if columns.start() == columns.end() {
        columns.start().to_string()
    } else {
        format!("{} to {}", columns.start(), columns.end())
    }
}

/// Checks that a field can be written into one column and read back unchanged
///
/// Columns are trimmed on decode, so surrounding whitespace is unencodable.
pub(crate) fn storable<'v>(
    kind: RecordKind,
    key: &dyn fmt::Display,
    field: &'static str,
    value: &'v str,
) -> Result<&'v str, CodecError> {
    if value.contains(FIELD_DELIMITER) || value.contains(['\n', '\r']) || value.trim() != value {
        return Err(CodecError::unencodable(kind, key, field));
    }
    Ok(value)
}

/// Splits a multi-valued column; an empty column yields no values
pub(crate) fn split_values(column: &str) -> Vec<String> {
    column
        .split(VALUE_DELIMITER)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins values into one column
///
/// Empty values and values containing a delimiter are rejected, since
/// [`split_values`] could not return them.
pub(crate) fn join_values<S: AsRef<str>>(
    kind: RecordKind,
    key: &dyn fmt::Display,
    field: &'static str,
    values: &[S],
) -> Result<String, CodecError> {
    let mut joined = String::new();
    for (i, value) in values.iter().enumerate() {
        let value = storable(kind, key, field, value.as_ref())?;
        if value.is_empty() || value.contains(VALUE_DELIMITER) {
            return Err(CodecError::unencodable(kind, key, field));
        }
        if i > 0 {
            joined.push(VALUE_DELIMITER);
        }
        joined.push_str(value);
    }
    Ok(joined)
}
