//! Insurance cards

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::CardNumber;

/// An insurance card
///
/// A card is either fully issued (holder, owner, and expiration known) or a
/// number-only card created when a customer is registered before the card
/// details exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceCard {
    /// Unique card number
    pub card_number: CardNumber,
    /// Name printed on the card
    pub card_holder: String,
    /// Name of the policy owner
    pub policy_owner: String,
    /// Expiration date, absent before issuance
    pub expiration_date: Option<NaiveDate>,
}

impl InsuranceCard {
    /// Creates a fully issued card
    pub fn new(
        card_number: CardNumber,
        card_holder: impl Into<String>,
        policy_owner: impl Into<String>,
        expiration_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            card_number,
            card_holder: card_holder.into(),
            policy_owner: policy_owner.into(),
            expiration_date,
        }
    }

    /// Creates a card known only by its number
    pub fn number_only(card_number: CardNumber) -> Self {
        Self {
            card_number,
            card_holder: String::new(),
            policy_owner: String::new(),
            expiration_date: None,
        }
    }

    /// Returns true if holder details have been recorded
    pub fn is_issued(&self) -> bool {
        !self.card_holder.is_empty() || !self.policy_owner.is_empty() || self.expiration_date.is_some()
    }

    /// Returns true if the card has expired as of `date`
    ///
    /// A card without an expiration date never expires.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|expiry| expiry < date)
    }

    /// Changes the card number, keeping every other detail
    pub fn renumber(&mut self, card_number: CardNumber) {
        self.card_number = card_number;
    }
}
