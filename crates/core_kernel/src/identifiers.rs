//! Strongly-typed record keys
//!
//! Each key is a newtype around the validated text form. The only way to
//! obtain one is through a validating constructor, so a store keyed by these
//! types can never hold a malformed key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::{is_valid_card_number, is_valid_claim_id, is_valid_customer_id};

macro_rules! define_key {
    ($(#[$meta:meta])* $name:ident, $is_valid:path, $error:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses and validates the key, trimming surrounding whitespace
            pub fn parse(value: &str) -> Result<Self, ValidationError> {
                let trimmed = value.trim();
                if $is_valid(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err($error(trimmed.to_string()))
                }
            }

            /// Returns the key text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_key!(
    /// Claim identifier: `f-` followed by exactly 10 digits
    ClaimId,
    is_valid_claim_id,
    ValidationError::InvalidClaimId
);

define_key!(
    /// Customer identifier: `c-` followed by exactly 7 digits
    CustomerId,
    is_valid_customer_id,
    ValidationError::InvalidCustomerId
);

define_key!(
    /// Insurance card number: exactly 10 digits
    CardNumber,
    is_valid_card_number,
    ValidationError::InvalidCardNumber
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_display() {
        let id = ClaimId::parse("f-0123456789").unwrap();
        assert_eq!(id.to_string(), "f-0123456789");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id: CustomerId = "  c-0000001 ".parse().unwrap();
        assert_eq!(id.as_str(), "c-0000001");
    }

    #[test]
    fn test_rejection_reports_trimmed_value() {
        let err = CardNumber::parse(" 12345 ").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCardNumber("12345".to_string()));
    }
}
