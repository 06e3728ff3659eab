//! Record Store and Flat-File Persistence
//!
//! This crate holds the in-memory record collections for customers,
//! insurance cards, and claims, and the codec that moves them to and from
//! comma-delimited text files between runs.
//!
//! # Architecture
//!
//! - [`RecordStore`] / [`InMemoryStore`]: a keyed collection per record type
//! - [`InsuranceRegistry`]: the validation layer that owns the three stores
//!   and enforces uniqueness, card ownership, and dependent links
//! - [`codec`]: line-oriented encode/decode of each record type
//! - [`FlatFileStore`]: reads and rewrites the files named by a [`StorageConfig`]
//!
//! # File Formats
//!
//! One record per line, no header row, dates as `YYYY-MM-DD`:
//!
//! ```text
//! customers:        id,fullName,role,cardNumber[,dep1;dep2]
//! insurance cards:  cardNumber,cardHolder,policyOwner,expirationDate
//! claims:           id,claimDate,insuredPerson,cardNumber,examDate,doc1;doc2,claimAmount,status,receiverBankingInfo
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use infra_store::{FlatFileStore, InsuranceRegistry, StorageConfig};
//!
//! let files = FlatFileStore::new(StorageConfig::in_dir("data"));
//! let outcome = files.load_all();
//! let (mut registry, _warnings) = InsuranceRegistry::from_loaded(outcome.data);
//! // ... mutate the registry ...
//! registry.save(&files).expect("save failed");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod flat_file;
pub mod record;
pub mod registry;
pub mod requests;
pub mod store;

pub use codec::{Decoded, LoadWarning};
pub use config::StorageConfig;
pub use error::{CodecError, StoreError};
pub use flat_file::{FlatFileStore, LoadOutcome, LoadedData};
pub use record::{Record, RecordKind};
pub use registry::InsuranceRegistry;
pub use requests::{
    NewCardRequest, NewClaimRequest, NewCustomerRequest, UpdateClaimRequest,
    UpdateCustomerRequest,
};
pub use store::{InMemoryStore, RecordStore};
