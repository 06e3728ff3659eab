//! Keyed record collections
//!
//! A store is a plain keyed collection. It does not decide whether an
//! insert that hits an existing key is an error: `add` overwrites and hands
//! back the displaced record, and callers that must reject duplicates check
//! [`RecordStore::contains`] first (see [`crate::InsuranceRegistry`]).

use std::collections::{BTreeMap, BTreeSet};

use crate::record::Record;

/// Operations every record collection provides
pub trait RecordStore<R: Record> {
    /// Inserts a record, returning the one it replaced, if any
    fn add(&mut self, record: R) -> Option<R>;

    /// Replaces the record with the same key
    ///
    /// Returns false and changes nothing when the key is absent.
    fn update(&mut self, record: R) -> bool;

    /// Removes the record for `key`, if present
    fn delete(&mut self, key: &R::Key) -> Option<R>;

    /// Returns the record for `key`
    fn get_one(&self, key: &R::Key) -> Option<&R>;

    /// Returns a snapshot of every record
    ///
    /// Callers must not rely on the order.
    fn get_all(&self) -> Vec<R>;

    /// Returns every key currently present
    fn get_all_keys(&self) -> BTreeSet<R::Key>;

    /// Number of records
    fn len(&self) -> usize;

    /// Returns true if `key` is present
    fn contains(&self, key: &R::Key) -> bool {
        self.get_one(key).is_some()
    }

    /// Returns true if the store holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store backed by an ordered map
#[derive(Debug, Clone)]
pub struct InMemoryStore<R: Record> {
    records: BTreeMap<R::Key, R>,
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<R: Record> InMemoryStore<R> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the records without cloning
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }
}

impl<R: Record> FromIterator<R> for InMemoryStore<R> {
    /// Collects records; a later record replaces an earlier one with the same key
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.add(record);
        }
        store
    }
}

impl<R: Record> RecordStore<R> for InMemoryStore<R> {
    fn add(&mut self, record: R) -> Option<R> {
        tracing::debug!(kind = %R::KIND, key = %record.key(), "Record stored");
        self.records.insert(record.key().clone(), record)
    }

    fn update(&mut self, record: R) -> bool {
        match self.records.get_mut(record.key()) {
            Some(existing) => {
                tracing::debug!(kind = %R::KIND, key = %record.key(), "Record updated");
                *existing = record;
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, key: &R::Key) -> Option<R> {
        let removed = self.records.remove(key);
        if removed.is_some() {
            tracing::debug!(kind = %R::KIND, key = %key, "Record deleted");
        }
        removed
    }

    fn get_one(&self, key: &R::Key) -> Option<&R> {
        self.records.get(key)
    }

    fn get_all(&self) -> Vec<R> {
        self.records.values().cloned().collect()
    }

    fn get_all_keys(&self) -> BTreeSet<R::Key> {
        self.records.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
