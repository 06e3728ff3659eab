//! Pre-built Test Fixtures
//!
//! Provides ready-to-use keys, dates, and records. Values are fixed so that
//! tests comparing file contents stay predictable.

use chrono::NaiveDate;
use core_kernel::{CardNumber, ClaimId, CustomerId};
use domain_party::{Customer, CustomerRole, InsuranceCard};

/// Fixture for record keys
pub struct IdFixtures;

impl IdFixtures {
    /// A policy holder's customer ID
    pub fn holder_id() -> CustomerId {
        customer_id("c-0000001")
    }

    /// A dependent's customer ID
    pub fn dependent_id() -> CustomerId {
        customer_id("c-0000002")
    }

    /// A card number
    pub fn card_number() -> CardNumber {
        card_number("1234567890")
    }

    /// A second card number
    pub fn other_card_number() -> CardNumber {
        card_number("0987654321")
    }

    /// A claim ID
    pub fn claim_id() -> ClaimId {
        claim_id("f-0000000001")
    }
}

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Claim filing date (Mar 15, 2024)
    pub fn claim_date() -> NaiveDate {
        date(2024, 3, 15)
    }

    /// Examination date (Mar 1, 2024)
    pub fn exam_date() -> NaiveDate {
        date(2024, 3, 1)
    }

    /// Card expiration date (Dec 31, 2026)
    pub fn card_expiry() -> NaiveDate {
        date(2026, 12, 31)
    }
}

/// Fixture for whole records
pub struct RecordFixtures;

impl RecordFixtures {
    /// Ann, a policy holder holding [`IdFixtures::card_number`]
    pub fn ann() -> Customer {
        Customer::new(IdFixtures::holder_id(), "Ann")
            .with_role(CustomerRole::PolicyHolder)
            .with_insurance_card(Self::ann_card())
    }

    /// Bo, a dependent without a card
    pub fn bo() -> Customer {
        Customer::new(IdFixtures::dependent_id(), "Bo")
    }

    /// The card Ann holds
    pub fn ann_card() -> InsuranceCard {
        InsuranceCard::new(
            IdFixtures::card_number(),
            "Ann",
            "Acme Corp",
            Some(TemporalFixtures::card_expiry()),
        )
    }
}

/// Parses a customer ID, panicking on invalid input
pub fn customer_id(raw: &str) -> CustomerId {
    CustomerId::parse(raw).unwrap_or_else(|e| panic!("bad customer ID fixture {raw}: {e}"))
}

/// Parses a card number, panicking on invalid input
pub fn card_number(raw: &str) -> CardNumber {
    CardNumber::parse(raw).unwrap_or_else(|e| panic!("bad card number fixture {raw}: {e}"))
}

/// Parses a claim ID, panicking on invalid input
pub fn claim_id(raw: &str) -> ClaimId {
    ClaimId::parse(raw).unwrap_or_else(|e| panic!("bad claim ID fixture {raw}: {e}"))
}

/// Builds a date, panicking on an impossible one
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("bad date fixture {year}-{month}-{day}"))
}
