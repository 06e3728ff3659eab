//! Claims domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::ValidationError;

/// Errors that can occur in the claims domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Claim amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
}
