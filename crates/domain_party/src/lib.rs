//! Party Management Domain
//!
//! This crate models the people the insurance records system tracks and the
//! cards they hold:
//!
//! - [`Customer`]: an insured person, either a policy holder or a dependent
//! - [`InsuranceCard`]: a card owned by at most one customer at a time
//! - Dependent links: a policy holder lists dependents by [`CustomerId`]
//!
//! # Dependent links
//!
//! Dependents are stored as identifiers, not embedded customers. A dependent
//! is itself a top-level customer record, and the link is resolved against
//! the customer store each time it is read. Deleting a customer therefore
//! leaves a link that simply fails to resolve.
//!
//! ```rust
//! use core_kernel::CustomerId;
//! use domain_party::{Customer, CustomerRole};
//!
//! let ann_id = CustomerId::parse("c-0000001").unwrap();
//! let bo_id = CustomerId::parse("c-0000002").unwrap();
//!
//! let mut ann = Customer::new(ann_id, "Ann Lee").with_role(CustomerRole::PolicyHolder);
//! ann.add_dependent(bo_id.clone()).unwrap();
//! assert!(ann.has_dependent(&bo_id));
//! ```
//!
//! [`CustomerId`]: core_kernel::CustomerId

pub mod card;
pub mod customer;
pub mod dependents;
pub mod error;

pub use card::InsuranceCard;
pub use customer::{Customer, CustomerRole};
pub use dependents::creates_cycle;
pub use error::PartyError;
