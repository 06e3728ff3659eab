//! Insurance Records - Command-Line Binary
//!
//! Loads the record files, runs one command, and saves the files again if
//! the command changed anything.
//!
//! # Usage
//!
//! ```bash
//! insurance-cli --data-dir data customers add --id c-0000001 --name "Ann Lee" --role "policy holder" --card 1234567890
//! insurance-cli claims list --customer c-0000001 --json
//! insurance-cli claims update f-0000000001 --status Processing
//! ```
//!
//! # Environment Variables
//!
//! * `INSURANCE_DATA_DIR` - Directory holding the record files (default: .)
//! * `INSURANCE_CUSTOMERS_FILE`, `INSURANCE_CARDS_FILE`, `INSURANCE_CLAIMS_FILE` - Per-file overrides
//! * `INSURANCE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `RUST_LOG` - Full tracing filter, takes precedence over the log level

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_store::{FlatFileStore, InsuranceRegistry};
use interface_cli::{execute, Cli, CliConfig, CliError};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    init_tracing(&config.log_level);

    let files = FlatFileStore::new(config.storage());
    let outcome = files.load_all();
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    for error in &outcome.errors {
        eprintln!("error: {error}");
    }

    let load_failures = outcome.errors.len();
    let mutating = cli.command.is_mutating();
    if mutating && load_failures > 0 {
        return Err(CliError::IncompleteLoad(load_failures).into());
    }

    let (mut registry, warnings) = InsuranceRegistry::from_loaded(outcome.data);
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }

    let result = execute(cli.command, &mut registry)?;
    if result.modified {
        registry.save(&files).context("Failed to save record files")?;
    }
    println!("{}", result.text);

    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `log_level`; an unparseable level falls back to info.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
