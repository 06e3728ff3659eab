//! Requests accepted by the registry
//!
//! Requests carry field values as the caller collected them. Each one is
//! validated in full before the registry touches a store, so a rejected
//! request leaves every store exactly as it was.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use core_kernel::validation::{validate_document_reference, validate_free_text, validate_person_name};
use core_kernel::{CardNumber, ClaimId, CustomerId, ValidationError};
use domain_claims::{Claim, ClaimStatus};
use domain_party::{CustomerRole, InsuranceCard};

use crate::error::StoreError;

/// Request for registering a new customer
#[derive(Debug, Clone)]
pub struct NewCustomerRequest {
    /// Customer ID, `c-` and 7 digits
    pub id: String,
    /// Full name
    pub full_name: String,
    /// Role text, e.g. "policy holder" or "dependent"
    pub role: String,
    /// Card to attach, if any
    pub card_number: Option<String>,
    /// IDs of existing customers to list as dependents
    pub dependents: Vec<String>,
}

/// A customer request whose fields passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidCustomer {
    pub id: CustomerId,
    pub full_name: String,
    pub role: CustomerRole,
    pub card_number: Option<CardNumber>,
    pub dependents: Vec<CustomerId>,
}

impl NewCustomerRequest {
    /// Creates a request for a dependent with no card
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            role: CustomerRole::Dependent.label().to_string(),
            card_number: None,
            dependents: Vec::new(),
        }
    }

    /// Sets the role text
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the card number
    pub fn card_number(mut self, card_number: impl Into<String>) -> Self {
        self.card_number = Some(card_number.into());
        self
    }

    /// Adds a dependent ID
    pub fn dependent(mut self, id: impl Into<String>) -> Self {
        self.dependents.push(id.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<ValidCustomer, ValidationError> {
        Ok(ValidCustomer {
            id: CustomerId::parse(&self.id)?,
            full_name: validate_person_name("full name", &self.full_name)?,
            role: self.role.parse()?,
            card_number: self.card_number.as_deref().map(CardNumber::parse).transpose()?,
            dependents: self
                .dependents
                .iter()
                .map(|id| CustomerId::parse(id))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Request for changing a customer's name or card number
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomerRequest {
    /// New full name
    pub full_name: Option<String>,
    /// New card number
    pub card_number: Option<String>,
}

impl UpdateCustomerRequest {
    pub(crate) fn validate(&self) -> Result<(Option<String>, Option<CardNumber>), ValidationError> {
        let full_name = self
            .full_name
            .as_deref()
            .map(|name| validate_person_name("full name", name))
            .transpose()?;
        let card_number = self.card_number.as_deref().map(CardNumber::parse).transpose()?;
        Ok((full_name, card_number))
    }
}

/// Request for registering an insurance card
#[derive(Debug, Clone)]
pub struct NewCardRequest {
    /// Card number, 10 digits
    pub card_number: String,
    /// Name printed on the card
    pub card_holder: String,
    /// Policy owner name
    pub policy_owner: String,
    /// Expiration date
    pub expiration_date: Option<NaiveDate>,
}

impl NewCardRequest {
    pub(crate) fn validate(&self) -> Result<InsuranceCard, ValidationError> {
        Ok(InsuranceCard::new(
            CardNumber::parse(&self.card_number)?,
            validate_person_name("card holder", &self.card_holder)?,
            validate_person_name("policy owner", &self.policy_owner)?,
            self.expiration_date,
        ))
    }
}

/// Request for filing a claim
///
/// New claims always start with status New.
#[derive(Debug, Clone)]
pub struct NewClaimRequest {
    /// Claim ID, `f-` and 10 digits
    pub id: String,
    /// Insured person's name
    pub insured_person: String,
    /// Card number, 10 digits
    pub card_number: String,
    /// Filing date; today when absent
    pub claim_date: Option<NaiveDate>,
    /// Examination date
    pub exam_date: Option<NaiveDate>,
    /// Document references
    pub documents: Vec<String>,
    /// Claimed amount
    pub claim_amount: Decimal,
    /// Receiver banking details
    pub receiver_banking_info: String,
}

impl NewClaimRequest {
    /// Creates a request with no documents, zero amount, and today's date
    pub fn new(id: impl Into<String>, insured_person: impl Into<String>, card_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            insured_person: insured_person.into(),
            card_number: card_number.into(),
            claim_date: None,
            exam_date: None,
            documents: Vec::new(),
            claim_amount: Decimal::ZERO,
            receiver_banking_info: String::new(),
        }
    }

    pub(crate) fn validate(&self) -> Result<Claim, StoreError> {
        let claim_date = self.claim_date.unwrap_or_else(|| Utc::now().date_naive());
        let claim = Claim::new(
            ClaimId::parse(&self.id)?,
            validate_person_name("insured person", &self.insured_person)?,
            CardNumber::parse(&self.card_number)?,
            Some(claim_date),
        )
        .with_exam_date(self.exam_date)
        .with_documents(validate_documents(&self.documents)?)
        .with_receiver_banking_info(validate_free_text("receiver banking info", &self.receiver_banking_info)?)
        .with_claim_amount(self.claim_amount)?;
        Ok(claim)
    }
}

/// Request for changing a claim
///
/// Fields left `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateClaimRequest {
    pub claim_date: Option<NaiveDate>,
    pub exam_date: Option<NaiveDate>,
    pub documents: Option<Vec<String>>,
    pub claim_amount: Option<Decimal>,
    /// Status text, case-insensitive
    pub status: Option<String>,
    pub receiver_banking_info: Option<String>,
}

impl UpdateClaimRequest {
    /// Returns `claim` with every requested change applied
    pub(crate) fn apply(&self, claim: &Claim) -> Result<Claim, StoreError> {
        let mut updated = claim.clone();
        if let Some(date) = self.claim_date {
            updated.claim_date = Some(date);
        }
        if let Some(date) = self.exam_date {
            updated.exam_date = Some(date);
        }
        if let Some(documents) = &self.documents {
            updated.documents = validate_documents(documents)?;
        }
        if let Some(amount) = self.claim_amount {
            updated.set_claim_amount(amount)?;
        }
        if let Some(status) = &self.status {
            updated.update_status(status.parse::<ClaimStatus>()?);
        }
        if let Some(info) = &self.receiver_banking_info {
            updated.receiver_banking_info = validate_free_text("receiver banking info", info)?;
        }
        Ok(updated)
    }
}

fn validate_documents(documents: &[String]) -> Result<Vec<String>, ValidationError> {
    documents
        .iter()
        .map(|document| validate_document_reference(document))
        .collect()
}
