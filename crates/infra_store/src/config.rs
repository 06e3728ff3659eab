//! Storage configuration
//!
//! File locations are supplied by the caller at run time; nothing in the
//! store knows a default location beyond the file names below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name for customer records
pub const CUSTOMERS_FILE: &str = "customers.txt";
/// Default file name for insurance card records
pub const CARDS_FILE: &str = "insurance_cards.txt";
/// Default file name for claim records
pub const CLAIMS_FILE: &str = "claims.txt";

/// Locations of the three record files
///
/// # Example
///
/// ```rust
/// use infra_store::StorageConfig;
///
/// let config = StorageConfig::in_dir("/var/lib/insurance")
///     .claims_path("/tmp/claims.txt");
/// assert!(config.customers_path.ends_with("customers.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Customer file
    pub customers_path: PathBuf,
    /// Insurance card file
    pub cards_path: PathBuf,
    /// Claim file
    pub claims_path: PathBuf,
}

impl StorageConfig {
    /// Places all three files in `dir` under their default names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            customers_path: dir.join(CUSTOMERS_FILE),
            cards_path: dir.join(CARDS_FILE),
            claims_path: dir.join(CLAIMS_FILE),
        }
    }

    /// Overrides the customer file
    pub fn customers_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.customers_path = path.into();
        self
    }

    /// Overrides the insurance card file
    pub fn cards_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cards_path = path.into();
        self
    }

    /// Overrides the claim file
    pub fn claims_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.claims_path = path.into();
        self
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
