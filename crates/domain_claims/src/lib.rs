//! Claims Management Domain
//!
//! This crate models reimbursement claims filed against insurance cards.
//!
//! # Claim Lifecycle
//!
//! ```text
//! New <-> Processing <-> Done
//! ```
//!
//! Claims are created `New`. Status changes are free-form: any status may be
//! set at any time, there is no enforced transition order.

pub mod claim;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use error::ClaimError;
