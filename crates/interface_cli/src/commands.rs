//! Command execution
//!
//! Each command runs against an already-loaded registry and reports whether
//! it changed anything; the binary decides whether to save.

use core_kernel::{CardNumber, ClaimId, CustomerId, ValidationError};
use domain_claims::Claim;
use infra_store::{
    InsuranceRegistry, NewCardRequest, NewClaimRequest, NewCustomerRequest, RecordKind, RecordStore,
    StoreError, UpdateClaimRequest, UpdateCustomerRequest,
};

use crate::cli::{
    AddCardArgs, AddClaimArgs, AddCustomerArgs, CardCommand, ClaimCommand, Command, CustomerCommand,
    ListClaimsArgs, UpdateClaimArgs, UpdateCustomerArgs,
};
use crate::error::CliError;
use crate::output;

/// What a command printed and whether it changed the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub modified: bool,
}

impl CommandOutput {
    fn read(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modified: false,
        }
    }

    fn changed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modified: true,
        }
    }
}

/// Runs `command` against `registry`
pub fn execute(command: Command, registry: &mut InsuranceRegistry) -> Result<CommandOutput, CliError> {
    tracing::debug!(?command, "Executing command");
    match command {
        Command::Customers(cmd) => customers(cmd, registry),
        Command::Cards(cmd) => cards(cmd, registry),
        Command::Claims(cmd) => claims(cmd, registry),
    }
}

fn customers(command: CustomerCommand, registry: &mut InsuranceRegistry) -> Result<CommandOutput, CliError> {
    match command {
        CustomerCommand::List(args) => {
            let all = registry.customers().get_all();
            let text = if args.json {
                output::to_json(&all)?
            } else {
                output::lines(&all, output::customer_line, "No customers")
            };
            Ok(CommandOutput::read(text))
        }
        CustomerCommand::Show { id } => {
            let id = key(CustomerId::parse(&id))?;
            let customer = registry
                .customer(&id)
                .ok_or_else(|| CliError::not_found(RecordKind::Customer, &id))?;

            let mut text = output::customer_line(customer);
            for dependent in registry.dependents_of(&id) {
                text.push_str(&format!("\n  dependent: {}", output::customer_line(dependent)));
            }
            for missing in registry.dangling_dependents(&id) {
                text.push_str(&format!("\n  dependent: {} (no such customer)", missing));
            }
            Ok(CommandOutput::read(text))
        }
        CustomerCommand::Add(args) => {
            let customer = registry.add_customer(customer_request(args))?;
            Ok(CommandOutput::changed(format!("Added {}", output::customer_line(&customer))))
        }
        CustomerCommand::Update(UpdateCustomerArgs { id, name, card }) => {
            let id = key(CustomerId::parse(&id))?;
            let request = UpdateCustomerRequest {
                full_name: name,
                card_number: card,
            };
            let customer = registry
                .update_customer(&id, request)?
                .ok_or_else(|| CliError::not_found(RecordKind::Customer, &id))?;
            Ok(CommandOutput::changed(format!("Updated {}", output::customer_line(&customer))))
        }
        CustomerCommand::Delete { id } => {
            let id = key(CustomerId::parse(&id))?;
            registry
                .delete_customer(&id)
                .ok_or_else(|| CliError::not_found(RecordKind::Customer, &id))?;
            Ok(CommandOutput::changed(format!("Deleted customer {id}")))
        }
        CustomerCommand::AddDependent { holder, dependent } => {
            let holder = key(CustomerId::parse(&holder))?;
            let dependent = key(CustomerId::parse(&dependent))?;
            registry.add_dependent(&holder, &dependent)?;
            Ok(CommandOutput::changed(format!("{dependent} is now a dependent of {holder}")))
        }
        CustomerCommand::RemoveDependent { holder, dependent } => {
            let holder = key(CustomerId::parse(&holder))?;
            let dependent = key(CustomerId::parse(&dependent))?;
            if registry.remove_dependent(&holder, &dependent) {
                Ok(CommandOutput::changed(format!("{dependent} is no longer a dependent of {holder}")))
            } else {
                Ok(CommandOutput::read(format!("{dependent} is not a dependent of {holder}")))
            }
        }
    }
}

fn customer_request(args: AddCustomerArgs) -> NewCustomerRequest {
    let mut request = NewCustomerRequest::new(args.id, args.name).role(args.role);
    if let Some(card) = args.card {
        request = request.card_number(card);
    }
    for dependent in args.dependents {
        request = request.dependent(dependent);
    }
    request
}

fn cards(command: CardCommand, registry: &mut InsuranceRegistry) -> Result<CommandOutput, CliError> {
    match command {
        CardCommand::List(args) => {
            let all = registry.cards().get_all();
            let text = if args.json {
                output::to_json(&all)?
            } else {
                output::lines(&all, output::card_line, "No insurance cards")
            };
            Ok(CommandOutput::read(text))
        }
        CardCommand::Show { number } => {
            let number = key(CardNumber::parse(&number))?;
            let card = registry
                .card(&number)
                .ok_or_else(|| CliError::not_found(RecordKind::InsuranceCard, &number))?;

            let mut text = output::card_line(card);
            match registry.owner_of_card(&number) {
                Some(owner) => text.push_str(&format!("\n  held by {} ({})", owner.full_name, owner.id)),
                None => text.push_str("\n  not held by any customer"),
            }
            Ok(CommandOutput::read(text))
        }
        CardCommand::Add(AddCardArgs {
            number,
            holder,
            owner,
            expires,
        }) => {
            let card = registry.add_card(NewCardRequest {
                card_number: number,
                card_holder: holder,
                policy_owner: owner,
                expiration_date: expires,
            })?;
            Ok(CommandOutput::changed(format!("Added {}", output::card_line(&card))))
        }
        CardCommand::Assign { customer, number } => {
            let customer = key(CustomerId::parse(&customer))?;
            let number = key(CardNumber::parse(&number))?;
            registry.assign_card(&customer, &number)?;
            Ok(CommandOutput::changed(format!("Card {number} assigned to {customer}")))
        }
        CardCommand::Delete { number } => {
            let number = key(CardNumber::parse(&number))?;
            registry
                .delete_card(&number)
                .ok_or_else(|| CliError::not_found(RecordKind::InsuranceCard, &number))?;
            Ok(CommandOutput::changed(format!("Deleted insurance card {number}")))
        }
    }
}

fn claims(command: ClaimCommand, registry: &mut InsuranceRegistry) -> Result<CommandOutput, CliError> {
    match command {
        ClaimCommand::List(args) => list_claims(args, registry),
        ClaimCommand::Show { id } => {
            let id = key(ClaimId::parse(&id))?;
            let claim = registry
                .claim(&id)
                .ok_or_else(|| CliError::not_found(RecordKind::Claim, &id))?;
            Ok(CommandOutput::read(output::claim_detail(claim)))
        }
        ClaimCommand::Add(args) => {
            let claim = registry.add_claim(claim_request(args))?;
            Ok(CommandOutput::changed(format!("Added {}", output::claim_line(&claim))))
        }
        ClaimCommand::Update(args) => {
            let id = key(ClaimId::parse(&args.id))?;
            let claim = registry
                .update_claim(&id, claim_update(args))?
                .ok_or_else(|| CliError::not_found(RecordKind::Claim, &id))?;
            Ok(CommandOutput::changed(format!("Updated {}", output::claim_line(&claim))))
        }
        ClaimCommand::Delete { id } => {
            let id = key(ClaimId::parse(&id))?;
            registry
                .delete_claim(&id)
                .ok_or_else(|| CliError::not_found(RecordKind::Claim, &id))?;
            Ok(CommandOutput::changed(format!("Deleted claim {id}")))
        }
    }
}

fn list_claims(args: ListClaimsArgs, registry: &InsuranceRegistry) -> Result<CommandOutput, CliError> {
    let selected: Vec<Claim> = match (&args.card, &args.customer) {
        (Some(number), _) => {
            let number = key(CardNumber::parse(number))?;
            registry.claims_for_card(&number).into_iter().cloned().collect()
        }
        (None, Some(customer)) => {
            let customer = key(CustomerId::parse(customer))?;
            if registry.customer(&customer).is_none() {
                return Err(CliError::not_found(RecordKind::Customer, &customer));
            }
            registry.claims_for_customer(&customer).into_iter().cloned().collect()
        }
        (None, None) => registry.claims().get_all(),
    };

    let text = if args.output.json {
        output::to_json(&selected)?
    } else {
        output::lines(&selected, output::claim_line, "No claims")
    };
    Ok(CommandOutput::read(text))
}

fn claim_request(args: AddClaimArgs) -> NewClaimRequest {
    let mut request = NewClaimRequest::new(args.id, args.insured, args.card);
    request.claim_date = args.date;
    request.exam_date = args.exam_date;
    request.documents = args.documents;
    request.claim_amount = args.amount;
    request.receiver_banking_info = args.banking;
    request
}

fn claim_update(args: UpdateClaimArgs) -> UpdateClaimRequest {
    UpdateClaimRequest {
        claim_date: args.date,
        exam_date: args.exam_date,
        documents: args.documents,
        claim_amount: args.amount,
        status: args.status,
        receiver_banking_info: args.banking,
    }
}

fn key<K>(parsed: Result<K, ValidationError>) -> Result<K, CliError> {
    parsed.map_err(|e| CliError::Store(StoreError::from(e)))
}
