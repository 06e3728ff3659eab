//! Record kinds and their keys

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CardNumber, ClaimId, CustomerId};
use domain_claims::Claim;
use domain_party::{Customer, InsuranceCard};

/// The three record types the system persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Customer,
    InsuranceCard,
    Claim,
}

impl RecordKind {
    /// Returns a lowercase name for messages
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Customer => "customer",
            RecordKind::InsuranceCard => "insurance card",
            RecordKind::Claim => "claim",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record stored under a unique key
pub trait Record: Clone {
    /// Key type, unique within one store
    type Key: Ord + Clone + fmt::Display;

    /// Kind of record, for messages and logs
    const KIND: RecordKind;

    /// Returns the record's key
    fn key(&self) -> &Self::Key;
}

impl Record for Customer {
    type Key = CustomerId;
    const KIND: RecordKind = RecordKind::Customer;

    fn key(&self) -> &CustomerId {
        &self.id
    }
}

impl Record for InsuranceCard {
    type Key = CardNumber;
    const KIND: RecordKind = RecordKind::InsuranceCard;

    fn key(&self) -> &CardNumber {
        &self.card_number
    }
}

impl Record for Claim {
    type Key = ClaimId;
    const KIND: RecordKind = RecordKind::Claim;

    fn key(&self) -> &ClaimId {
        &self.id
    }
}
