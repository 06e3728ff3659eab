//! Claim record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::validation::CLAIM_STATUS_LABELS;
use core_kernel::{CardNumber, ClaimId, ValidationError};
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Filed, not yet looked at
    #[default]
    New,
    /// Under processing
    Processing,
    /// Settled
    Done,
}

impl ClaimStatus {
    const ALL: [ClaimStatus; 3] = [ClaimStatus::New, ClaimStatus::Processing, ClaimStatus::Done];

    /// Returns the canonical label
    pub fn label(&self) -> &'static str {
        CLAIM_STATUS_LABELS[*self as usize]
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClaimStatus {
    type Err = ValidationError;

    /// Parses a status case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::InvalidStatus(trimmed.to_string()))
    }
}

/// A reimbursement claim against an insurance card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Date the claim was filed
    pub claim_date: Option<NaiveDate>,
    /// Name of the insured person
    pub insured_person: String,
    /// Card the claim is filed against
    ///
    /// Not checked against the card registry when written.
    pub card_number: CardNumber,
    /// Date of the examination
    pub exam_date: Option<NaiveDate>,
    /// Document references, in filing order
    pub documents: Vec<String>,
    /// Claimed amount, never negative
    claim_amount: Decimal,
    /// Status
    pub status: ClaimStatus,
    /// Receiver banking details
    pub receiver_banking_info: String,
}

impl Claim {
    /// Creates a new claim with zero amount and no documents
    pub fn new(
        id: ClaimId,
        insured_person: impl Into<String>,
        card_number: CardNumber,
        claim_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            claim_date,
            insured_person: insured_person.into(),
            card_number,
            exam_date: None,
            documents: Vec::new(),
            claim_amount: Decimal::ZERO,
            status: ClaimStatus::New,
            receiver_banking_info: String::new(),
        }
    }

    /// Sets the exam date
    pub fn with_exam_date(mut self, exam_date: Option<NaiveDate>) -> Self {
        self.exam_date = exam_date;
        self
    }

    /// Sets the document references
    pub fn with_documents(mut self, documents: Vec<String>) -> Self {
        self.documents = documents;
        self
    }

    /// Sets the claimed amount
    pub fn with_claim_amount(mut self, amount: Decimal) -> Result<Self, ClaimError> {
        self.set_claim_amount(amount)?;
        Ok(self)
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the receiver banking details
    pub fn with_receiver_banking_info(mut self, info: impl Into<String>) -> Self {
        self.receiver_banking_info = info.into();
        self
    }

    /// Returns the claimed amount
    pub fn claim_amount(&self) -> Decimal {
        self.claim_amount
    }

    /// Changes the claimed amount
    pub fn set_claim_amount(&mut self, amount: Decimal) -> Result<(), ClaimError> {
        if amount < Decimal::ZERO {
            return Err(ClaimError::NegativeAmount(amount));
        }
        self.claim_amount = amount;
        Ok(())
    }

    /// Sets the status, returning the previous one
    ///
    /// Any status may follow any other.
    pub fn update_status(&mut self, status: ClaimStatus) -> ClaimStatus {
        let previous = std::mem::replace(&mut self.status, status);
        if previous != status {
            tracing::debug!(claim_id = %self.id, from = %previous, to = %status, "Claim status changed");
        }
        previous
    }

    /// Returns true until the claim is done
    pub fn is_open(&self) -> bool {
        self.status != ClaimStatus::Done
    }
}
