//! CLI configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use infra_store::StorageConfig;

use crate::error::CliError;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "insurance.toml";

/// Prefix of the environment variables read into [`CliConfig`]
pub const ENV_PREFIX: &str = "INSURANCE";

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Directory holding the three record files
    pub data_dir: PathBuf,
    /// Customer file, overriding the one in `data_dir`
    pub customers_file: Option<PathBuf>,
    /// Insurance card file, overriding the one in `data_dir`
    pub cards_file: Option<PathBuf>,
    /// Claim file, overriding the one in `data_dir`
    pub claims_file: Option<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            customers_file: None,
            cards_file: None,
            claims_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a file and `INSURANCE_*` environment variables
    ///
    /// Without `path`, `insurance.toml` is read if it exists. Environment
    /// variables take precedence over the file.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Returns the record file locations
    pub fn storage(&self) -> StorageConfig {
        let mut storage = StorageConfig::in_dir(&self.data_dir);
        if let Some(path) = &self.customers_file {
            storage = storage.customers_path(path);
        }
        if let Some(path) = &self.cards_file {
            storage = storage.cards_path(path);
        }
        if let Some(path) = &self.claims_file {
            storage = storage.claims_path(path);
        }
        storage
    }
}
