//! Command definitions and argument parsing

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use core_kernel::parse_date;

/// Manage customers, insurance cards, and claims stored in flat files
#[derive(Debug, Parser)]
#[command(name = "insurance-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the record files
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Record groups
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage customers and their dependents
    #[command(subcommand)]
    Customers(CustomerCommand),

    /// Manage insurance cards
    #[command(subcommand)]
    Cards(CardCommand),

    /// Manage claims
    #[command(subcommand)]
    Claims(ClaimCommand),
}

impl Command {
    /// Returns true if the command changes any record
    pub fn is_mutating(&self) -> bool {
        match self {
            Command::Customers(cmd) => !matches!(cmd, CustomerCommand::List(_) | CustomerCommand::Show { .. }),
            Command::Cards(cmd) => !matches!(cmd, CardCommand::List(_) | CardCommand::Show { .. }),
            Command::Claims(cmd) => !matches!(cmd, ClaimCommand::List(_) | ClaimCommand::Show { .. }),
        }
    }
}

/// Output options shared by the list commands
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ListArgs {
    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Customer commands
#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// List every customer
    List(ListArgs),

    /// Show one customer and their dependents
    Show { id: String },

    /// Add a customer
    Add(AddCustomerArgs),

    /// Rename a customer or change their card number
    Update(UpdateCustomerArgs),

    /// Delete a customer
    Delete { id: String },

    /// List a customer as a dependent of a policy holder
    AddDependent { holder: String, dependent: String },

    /// Remove a dependent from a policy holder
    RemoveDependent { holder: String, dependent: String },
}

/// Arguments for adding a customer
#[derive(Debug, Args)]
pub struct AddCustomerArgs {
    /// Customer ID (c- followed by 7 digits)
    #[arg(long)]
    pub id: String,

    /// Full name
    #[arg(long)]
    pub name: String,

    /// Role: "policy holder" or "dependent"
    #[arg(long, default_value = "dependent")]
    pub role: String,

    /// Insurance card number (10 digits)
    #[arg(long)]
    pub card: Option<String>,

    /// Dependent customer ID; repeat for several
    #[arg(long = "dependent")]
    pub dependents: Vec<String>,
}

/// Arguments for updating a customer
#[derive(Debug, Args)]
pub struct UpdateCustomerArgs {
    /// Customer ID
    pub id: String,

    /// New full name
    #[arg(long)]
    pub name: Option<String>,

    /// New insurance card number
    #[arg(long)]
    pub card: Option<String>,
}

/// Insurance card commands
#[derive(Debug, Subcommand)]
pub enum CardCommand {
    /// List every card
    List(ListArgs),

    /// Show one card and its holder
    Show { number: String },

    /// Add a card, or fill in the details of a number-only card
    Add(AddCardArgs),

    /// Give an existing card to a customer
    Assign { customer: String, number: String },

    /// Delete a card
    Delete { number: String },
}

/// Arguments for adding a card
#[derive(Debug, Args)]
pub struct AddCardArgs {
    /// Card number (10 digits)
    #[arg(long)]
    pub number: String,

    /// Name printed on the card
    #[arg(long)]
    pub holder: String,

    /// Policy owner
    #[arg(long)]
    pub owner: String,

    /// Expiration date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub expires: Option<NaiveDate>,
}

/// Claim commands
#[derive(Debug, Subcommand)]
pub enum ClaimCommand {
    /// List claims
    List(ListClaimsArgs),

    /// Show one claim
    Show { id: String },

    /// File a claim
    Add(AddClaimArgs),

    /// Change a claim
    Update(UpdateClaimArgs),

    /// Delete a claim
    Delete { id: String },
}

/// Arguments for listing claims
#[derive(Debug, Args)]
pub struct ListClaimsArgs {
    /// Only claims filed against this card
    #[arg(long, conflicts_with = "customer")]
    pub card: Option<String>,

    /// Only claims filed against this customer's card
    #[arg(long)]
    pub customer: Option<String>,

    #[command(flatten)]
    pub output: ListArgs,
}

/// Arguments for filing a claim
#[derive(Debug, Args)]
pub struct AddClaimArgs {
    /// Claim ID (f- followed by 10 digits)
    #[arg(long)]
    pub id: String,

    /// Insured person
    #[arg(long)]
    pub insured: String,

    /// Card number the claim is filed against
    #[arg(long)]
    pub card: String,

    /// Claim date (YYYY-MM-DD), today when omitted
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Examination date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub exam_date: Option<NaiveDate>,

    /// Document reference; repeat for several
    #[arg(long = "document")]
    pub documents: Vec<String>,

    /// Claimed amount
    #[arg(long, default_value = "0")]
    pub amount: Decimal,

    /// Receiver banking details
    #[arg(long, default_value = "")]
    pub banking: String,
}

/// Arguments for changing a claim
#[derive(Debug, Args)]
pub struct UpdateClaimArgs {
    /// Claim ID
    pub id: String,

    /// New status: New, Processing, or Done
    #[arg(long)]
    pub status: Option<String>,

    /// New claim date
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// New examination date
    #[arg(long, value_parser = parse_date)]
    pub exam_date: Option<NaiveDate>,

    /// Replacement document list; repeat for several
    #[arg(long = "document")]
    pub documents: Option<Vec<String>>,

    /// New amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// New receiver banking details
    #[arg(long)]
    pub banking: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_nested_command() {
        let cli = Cli::try_parse_from([
            "insurance-cli",
            "--data-dir",
            "data",
            "claims",
            "update",
            "f-0000000001",
            "--status",
            "done",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("data")));
        assert!(cli.command.is_mutating());
        assert!(matches!(cli.command, Command::Claims(ClaimCommand::Update(_))));
    }

    #[test]
    fn test_list_is_read_only() {
        let cli = Cli::try_parse_from(["insurance-cli", "customers", "list", "--json"]).unwrap();
        assert!(!cli.command.is_mutating());
        match cli.command {
            Command::Customers(CustomerCommand::List(args)) => assert!(args.json),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "insurance-cli",
            "cards",
            "add",
            "--number",
            "1234567890",
            "--holder",
            "Ann",
            "--owner",
            "Acme",
            "--expires",
            "2024-02-30",
        ]);
        assert!(result.is_err());
    }
}
