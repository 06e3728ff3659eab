//! Test Data Builders
//!
//! Provides builder patterns for constructing records with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::{CardNumber, ClaimId, CustomerId};
use domain_claims::{Claim, ClaimStatus};
use domain_party::{Customer, CustomerRole, InsuranceCard};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{IdFixtures, TemporalFixtures};

/// Builder for constructing test customers
pub struct CustomerBuilder {
    id: CustomerId,
    full_name: String,
    role: CustomerRole,
    card: Option<InsuranceCard>,
    dependents: Vec<CustomerId>,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    /// Creates a builder for a cardless dependent
    pub fn new() -> Self {
        Self {
            id: IdFixtures::dependent_id(),
            full_name: "Bo".to_string(),
            role: CustomerRole::Dependent,
            card: None,
            dependents: Vec::new(),
        }
    }

    /// Sets the customer ID
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = id;
        self
    }

    /// Sets the full name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = name.into();
        self
    }

    /// Makes the customer a policy holder
    pub fn policy_holder(mut self) -> Self {
        self.role = CustomerRole::PolicyHolder;
        self
    }

    /// Gives the customer a number-only card
    pub fn with_card_number(mut self, number: CardNumber) -> Self {
        self.card = Some(InsuranceCard::number_only(number));
        self
    }

    /// Gives the customer a full card
    pub fn with_card(mut self, card: InsuranceCard) -> Self {
        self.card = Some(card);
        self
    }

    /// Lists a dependent without any checks
    pub fn with_dependent(mut self, id: CustomerId) -> Self {
        self.dependents.push(id);
        self
    }

    /// Builds the customer
    pub fn build(self) -> Customer {
        let mut customer = Customer::new(self.id, self.full_name).with_role(self.role);
        customer.set_insurance_card(self.card);
        customer.dependents = self.dependents;
        customer
    }
}

/// Builder for constructing test cards
pub struct CardBuilder {
    card_number: CardNumber,
    card_holder: String,
    policy_owner: String,
    expiration_date: Option<NaiveDate>,
}

impl Default for CardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CardBuilder {
    /// Creates a builder for an issued card
    pub fn new() -> Self {
        Self {
            card_number: IdFixtures::card_number(),
            card_holder: "Ann".to_string(),
            policy_owner: "Acme Corp".to_string(),
            expiration_date: Some(TemporalFixtures::card_expiry()),
        }
    }

    /// Sets the card number
    pub fn with_number(mut self, number: CardNumber) -> Self {
        self.card_number = number;
        self
    }

    /// Sets the holder name
    pub fn with_holder(mut self, holder: impl Into<String>) -> Self {
        self.card_holder = holder.into();
        self
    }

    /// Sets the policy owner
    pub fn with_policy_owner(mut self, owner: impl Into<String>) -> Self {
        self.policy_owner = owner.into();
        self
    }

    /// Sets the expiration date
    pub fn with_expiration_date(mut self, date: Option<NaiveDate>) -> Self {
        self.expiration_date = date;
        self
    }

    /// Builds the card
    pub fn build(self) -> InsuranceCard {
        InsuranceCard::new(self.card_number, self.card_holder, self.policy_owner, self.expiration_date)
    }
}

/// Builder for constructing test claims
pub struct ClaimBuilder {
    id: ClaimId,
    insured_person: String,
    card_number: CardNumber,
    claim_date: Option<NaiveDate>,
    exam_date: Option<NaiveDate>,
    documents: Vec<String>,
    amount: Decimal,
    status: ClaimStatus,
    receiver_banking_info: String,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a builder for a filled-in new claim
    pub fn new() -> Self {
        Self {
            id: IdFixtures::claim_id(),
            insured_person: "Ann".to_string(),
            card_number: IdFixtures::card_number(),
            claim_date: Some(TemporalFixtures::claim_date()),
            exam_date: Some(TemporalFixtures::exam_date()),
            documents: vec!["receipt-1.pdf".to_string()],
            amount: dec!(150.00),
            status: ClaimStatus::New,
            receiver_banking_info: "ACME Bank 0001".to_string(),
        }
    }

    /// Sets the claim ID
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    /// Sets the insured person
    pub fn with_insured_person(mut self, name: impl Into<String>) -> Self {
        self.insured_person = name.into();
        self
    }

    /// Sets the card number
    pub fn with_card_number(mut self, number: CardNumber) -> Self {
        self.card_number = number;
        self
    }

    /// Sets the claim date
    pub fn with_claim_date(mut self, date: Option<NaiveDate>) -> Self {
        self.claim_date = date;
        self
    }

    /// Sets the exam date
    pub fn with_exam_date(mut self, date: Option<NaiveDate>) -> Self {
        self.exam_date = date;
        self
    }

    /// Sets the document list
    pub fn with_documents(mut self, documents: Vec<String>) -> Self {
        self.documents = documents;
        self
    }

    /// Sets the amount; must not be negative
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the banking details
    pub fn with_receiver_banking_info(mut self, info: impl Into<String>) -> Self {
        self.receiver_banking_info = info.into();
        self
    }

    /// Builds the claim
    ///
    /// # Panics
    ///
    /// Panics if the amount is negative.
    pub fn build(self) -> Claim {
        Claim::new(self.id, self.insured_person, self.card_number, self.claim_date)
            .with_exam_date(self.exam_date)
            .with_documents(self.documents)
            .with_status(self.status)
            .with_receiver_banking_info(self.receiver_banking_info)
            .with_claim_amount(self.amount)
            .unwrap_or_else(|e| panic!("claim builder given a bad amount: {e}"))
    }
}
