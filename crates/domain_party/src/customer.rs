//! Customers and their roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CardNumber, CustomerId, ValidationError};

use crate::card::InsuranceCard;
use crate::error::PartyError;

/// Role of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerRole {
    /// May list dependents
    PolicyHolder,
    /// Linked from a policy holder, filed independently
    Dependent,
}

impl CustomerRole {
    /// Returns the stored label of the role
    pub fn label(&self) -> &'static str {
        match self {
            CustomerRole::PolicyHolder => "policy holder",
            CustomerRole::Dependent => "dependent",
        }
    }

    /// Returns true for the policy holder role
    pub fn is_policy_holder(&self) -> bool {
        matches!(self, CustomerRole::PolicyHolder)
    }
}

impl fmt::Display for CustomerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CustomerRole {
    type Err = ValidationError;

    /// Accepts the role case-insensitively, with or without a separator
    /// between "policy" and "holder"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower == "dependent" {
            return Ok(CustomerRole::Dependent);
        }
        let separator = lower
            .strip_prefix("policy")
            .and_then(|rest| rest.strip_suffix("holder"));
        match separator {
            Some("" | " " | "_" | "-") => Ok(CustomerRole::PolicyHolder),
            _ => Err(ValidationError::InvalidRole(trimmed.to_string())),
        }
    }
}

/// An insured customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,
    /// Full name
    pub full_name: String,
    /// Role
    pub role: CustomerRole,
    /// Owned card, if any
    pub insurance_card: Option<InsuranceCard>,
    /// Dependents by ID, in the order they were added
    pub dependents: Vec<CustomerId>,
}

impl Customer {
    /// Creates a customer with no card and no dependents
    ///
    /// The role defaults to dependent until one is attached.
    pub fn new(id: CustomerId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            role: CustomerRole::Dependent,
            insurance_card: None,
            dependents: Vec::new(),
        }
    }

    /// Sets the role
    pub fn with_role(mut self, role: CustomerRole) -> Self {
        self.role = role;
        self
    }

    /// Attaches a card
    pub fn with_insurance_card(mut self, card: InsuranceCard) -> Self {
        self.insurance_card = Some(card);
        self
    }

    /// Replaces the owned card, returning the previous one
    pub fn set_insurance_card(&mut self, card: Option<InsuranceCard>) -> Option<InsuranceCard> {
        std::mem::replace(&mut self.insurance_card, card)
    }

    /// Returns the number of the owned card
    pub fn card_number(&self) -> Option<&CardNumber> {
        self.insurance_card.as_ref().map(|card| &card.card_number)
    }

    /// Returns true if this customer may list dependents
    pub fn is_policy_holder(&self) -> bool {
        self.role.is_policy_holder()
    }

    /// Renames the customer
    pub fn rename(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    /// Changes the number of the owned card
    ///
    /// Fails when the customer holds no card.
    pub fn update_insurance_card_number(&mut self, card_number: CardNumber) -> Result<(), PartyError> {
        match self.insurance_card.as_mut() {
            Some(card) => {
                card.renumber(card_number);
                Ok(())
            }
            None => Err(PartyError::NoInsuranceCard(self.id.to_string())),
        }
    }

    /// Returns true if `id` is listed as a dependent
    pub fn has_dependent(&self, id: &CustomerId) -> bool {
        self.dependents.contains(id)
    }

    /// Lists `dependent` as a dependent of this customer
    ///
    /// Only checks what can be decided from this record alone; cycle
    /// detection needs the whole customer set, see [`crate::creates_cycle`].
    pub fn add_dependent(&mut self, dependent: CustomerId) -> Result<(), PartyError> {
        if !self.is_policy_holder() {
            return Err(PartyError::NotPolicyHolder(self.id.to_string()));
        }
        if dependent == self.id {
            return Err(PartyError::SelfDependent(self.id.to_string()));
        }
        if self.has_dependent(&dependent) {
            return Err(PartyError::duplicate_dependent(&self.id, &dependent));
        }
        tracing::debug!(holder = %self.id, dependent = %dependent, "Dependent linked");
        self.dependents.push(dependent);
        Ok(())
    }

    /// Removes `dependent` from the list, returning whether it was present
    pub fn remove_dependent(&mut self, dependent: &CustomerId) -> bool {
        let before = self.dependents.len();
        self.dependents.retain(|id| id != dependent);
        before != self.dependents.len()
    }
}
