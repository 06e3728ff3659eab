//! Plain-text and JSON rendering of records

use serde::Serialize;

use core_kernel::format_optional_date;
use domain_claims::Claim;
use domain_party::{Customer, InsuranceCard};

use crate::error::CliError;

/// Renders records as a pretty-printed JSON array
pub fn to_json<T: Serialize>(records: &[T]) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// One-line summary of a customer
pub fn customer_line(customer: &Customer) -> String {
    let mut line = format!("{}  {}  {}", customer.id, customer.full_name, customer.role);
    if let Some(number) = customer.card_number() {
        line.push_str(&format!("  card {number}"));
    }
    if !customer.dependents.is_empty() {
        let ids: Vec<&str> = customer.dependents.iter().map(|id| id.as_str()).collect();
        line.push_str(&format!("  dependents {}", ids.join(", ")));
    }
    line
}

/// One-line summary of a card
pub fn card_line(card: &InsuranceCard) -> String {
    if !card.is_issued() {
        return format!("{}  (not issued)", card.card_number);
    }
    let expiry = match card.expiration_date {
        Some(date) => format!("expires {}", date),
        None => "no expiry".to_string(),
    };
    format!(
        "{}  {}  owner {}  {}",
        card.card_number, card.card_holder, card.policy_owner, expiry
    )
}

/// One-line summary of a claim
pub fn claim_line(claim: &Claim) -> String {
    format!(
        "{}  {}  {}  card {}  {}  {}",
        claim.id,
        format_optional_date(claim.claim_date),
        claim.insured_person,
        claim.card_number,
        claim.claim_amount(),
        claim.status
    )
}

/// Multi-line view of a claim
pub fn claim_detail(claim: &Claim) -> String {
    let documents = if claim.documents.is_empty() {
        "-".to_string()
    } else {
        claim.documents.join(", ")
    };
    [
        format!("Claim:          {}", claim.id),
        format!("Status:         {}", claim.status),
        format!("Claim date:     {}", format_optional_date(claim.claim_date)),
        format!("Insured person: {}", claim.insured_person),
        format!("Card:           {}", claim.card_number),
        format!("Exam date:      {}", format_optional_date(claim.exam_date)),
        format!("Documents:      {}", documents),
        format!("Amount:         {}", claim.claim_amount()),
        format!("Banking info:   {}", claim.receiver_banking_info),
    ]
    .join("\n")
}

/// Joins summary lines, or a placeholder when there are none
pub fn lines<T>(records: &[T], render: impl Fn(&T) -> String, empty: &str) -> String {
    if records.is_empty() {
        return empty.to_string();
    }
    records.iter().map(render).collect::<Vec<_>>().join("\n")
}
