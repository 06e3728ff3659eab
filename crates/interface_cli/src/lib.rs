//! Insurance Records CLI
//!
//! Argument definitions, configuration, and command execution for the
//! `insurance-cli` binary. Commands run against an [`InsuranceRegistry`]
//! and return their output as text, so they can be exercised without a
//! terminal.
//!
//! [`InsuranceRegistry`]: infra_store::InsuranceRegistry

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use commands::{execute, CommandOutput};
pub use config::CliConfig;
pub use error::CliError;
