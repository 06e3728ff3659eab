//! Party domain errors
//!
//! This module defines the errors raised when a customer, card, or dependent
//! link would violate a party invariant.

use thiserror::Error;

use core_kernel::ValidationError;

/// Errors that can occur in the party domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartyError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Only policy holders may list dependents
    #[error("Customer {0} is not a policy holder")]
    NotPolicyHolder(String),

    /// A customer cannot depend on itself
    #[error("Customer {0} cannot be its own dependent")]
    SelfDependent(String),

    /// The dependent is already listed
    #[error("Customer {dependent} is already a dependent of {holder}")]
    DuplicateDependent { holder: String, dependent: String },

    /// The link would make the holder reachable from its own dependent
    #[error("Adding {dependent} as a dependent of {holder} would create a cycle")]
    CircularDependency { holder: String, dependent: String },

    /// The customer has no insurance card to update
    #[error("Customer {0} has no insurance card")]
    NoInsuranceCard(String),
}

impl PartyError {
    /// Creates a DuplicateDependent error from any ID types
    pub fn duplicate_dependent(holder: impl std::fmt::Display, dependent: impl std::fmt::Display) -> Self {
        PartyError::DuplicateDependent {
            holder: holder.to_string(),
            dependent: dependent.to_string(),
        }
    }

    /// Creates a CircularDependency error from any ID types
    pub fn circular(holder: impl std::fmt::Display, dependent: impl std::fmt::Display) -> Self {
        PartyError::CircularDependency {
            holder: holder.to_string(),
            dependent: dependent.to_string(),
        }
    }
}
