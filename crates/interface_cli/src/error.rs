//! CLI error handling

use thiserror::Error;

use infra_store::{CodecError, RecordKind, StoreError};

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{kind} not found: {key}")]
    NotFound { kind: RecordKind, key: String },

    /// Some record files failed to load, so saving would discard their contents
    #[error("{0} record file(s) failed to load; refusing to save over them")]
    IncompleteLoad(usize),

    #[error("Save failed: {0}")]
    Save(#[from] CodecError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CliError {
    /// Creates a NotFound error
    pub fn not_found(kind: RecordKind, key: impl std::fmt::Display) -> Self {
        CliError::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}
