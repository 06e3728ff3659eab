//! Flat-file persistence
//!
//! Every load reads one whole file and every save rewrites one whole file.
//! File handles never outlive the call that opened them.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use domain_claims::Claim;
use domain_party::{Customer, InsuranceCard};

use crate::codec::{self, CardCodec, ClaimCodec, CustomerCodec, Decoded, LineCodec, LoadWarning};
use crate::config::StorageConfig;
use crate::error::CodecError;
use crate::record::Record;

/// Records read from all three files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedData {
    pub customers: Vec<Customer>,
    pub cards: Vec<InsuranceCard>,
    pub claims: Vec<Claim>,
}

/// Result of loading all three files
///
/// A file that failed to load contributes no records and one entry in
/// `errors`; the other files are still loaded. Callers should not save over
/// a file whose load failed unless they mean to discard its contents.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub data: LoadedData,
    pub warnings: Vec<LoadWarning>,
    pub errors: Vec<CodecError>,
}

impl LoadOutcome {
    /// Returns true if every file loaded
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    fn absorb<R>(&mut self, result: Result<Decoded<R>, CodecError>) -> Vec<R> {
        match result {
            Ok(decoded) => {
                self.warnings.extend(decoded.warnings);
                decoded.records
            }
            Err(error) => {
                self.errors.push(error);
                Vec::new()
            }
        }
    }
}

/// Reads and writes the record files named by a [`StorageConfig`]
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    config: StorageConfig,
}

impl FlatFileStore {
    /// Creates a store over the configured files
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Returns the file locations
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Loads customer records
    pub fn load_customers(&self) -> Result<Decoded<Customer>, CodecError> {
        load::<CustomerCodec>(&self.config.customers_path)
    }

    /// Loads insurance card records
    pub fn load_cards(&self) -> Result<Decoded<InsuranceCard>, CodecError> {
        load::<CardCodec>(&self.config.cards_path)
    }

    /// Loads claim records
    pub fn load_claims(&self) -> Result<Decoded<Claim>, CodecError> {
        load::<ClaimCodec>(&self.config.claims_path)
    }

    /// Loads all three files, cards first
    pub fn load_all(&self) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();
        outcome.data.cards = outcome.absorb(self.load_cards());
        outcome.data.customers = outcome.absorb(self.load_customers());
        outcome.data.claims = outcome.absorb(self.load_claims());
        outcome
    }

    /// Rewrites the customer file
    pub fn save_customers<'a>(&self, customers: impl IntoIterator<Item = &'a Customer>) -> Result<usize, CodecError> {
        save::<CustomerCodec, _>(&self.config.customers_path, customers)
    }

    /// Rewrites the insurance card file
    pub fn save_cards<'a>(&self, cards: impl IntoIterator<Item = &'a InsuranceCard>) -> Result<usize, CodecError> {
        save::<CardCodec, _>(&self.config.cards_path, cards)
    }

    /// Rewrites the claim file
    pub fn save_claims<'a>(&self, claims: impl IntoIterator<Item = &'a Claim>) -> Result<usize, CodecError> {
        save::<ClaimCodec, _>(&self.config.claims_path, claims)
    }
}

fn load<C: LineCodec>(path: &Path) -> Result<Decoded<C::Record>, CodecError> {
    let kind = <C::Record as Record>::KIND;
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%kind, path = %path.display(), "Record file not found, starting empty");
            return Ok(Decoded {
                records: Vec::new(),
                warnings: vec![LoadWarning::MissingFile {
                    kind,
                    path: path.to_path_buf(),
                }],
            });
        }
        Err(e) => return Err(CodecError::io(path, e)),
    };

    match codec::decode::<C>(&text) {
        Ok(decoded) => {
            tracing::info!(
                %kind,
                path = %path.display(),
                records = decoded.records.len(),
                warnings = decoded.warnings.len(),
                "Loaded records"
            );
            Ok(decoded)
        }
        Err(error) => {
            tracing::error!(%kind, path = %path.display(), %error, "Load aborted");
            Err(error)
        }
    }
}

fn save<'a, C, I>(path: &Path, records: I) -> Result<usize, CodecError>
where
    C: LineCodec,
    C::Record: 'a,
    I: IntoIterator<Item = &'a C::Record>,
{
    let kind = <C::Record as Record>::KIND;
    let text = codec::encode::<C, _>(records)?;
    let count = text.lines().count();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CodecError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| CodecError::io(path, e))?;

    tracing::info!(%kind, path = %path.display(), records = count, "Saved records");
    Ok(count)
}
