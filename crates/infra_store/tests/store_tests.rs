//! Tests for the keyed in-memory store

use infra_store::{InMemoryStore, RecordStore};
use test_utils::{claim_id, ClaimBuilder, IdFixtures};

use domain_claims::{Claim, ClaimStatus};

#[test]
fn test_add_then_get_one() {
    let mut store: InMemoryStore<Claim> = InMemoryStore::new();
    let claim = ClaimBuilder::new().build();

    assert!(store.add(claim.clone()).is_none());
    assert_eq!(store.get_one(&claim.id), Some(&claim));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_overwrites_and_returns_previous() {
    let mut store: InMemoryStore<Claim> = InMemoryStore::new();
    let first = ClaimBuilder::new().build();
    let second = ClaimBuilder::new().with_status(ClaimStatus::Done).build();

    store.add(first.clone());
    assert_eq!(store.add(second.clone()), Some(first));
    assert_eq!(store.get_one(&second.id), Some(&second));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_update_missing_key_is_noop() {
    let mut store: InMemoryStore<Claim> = InMemoryStore::new();
    assert!(!store.update(ClaimBuilder::new().build()));
    assert!(store.is_empty());
}

#[test]
fn test_delete_then_get_one() {
    let mut store: InMemoryStore<Claim> = InMemoryStore::new();
    let claim = ClaimBuilder::new().build();
    store.add(claim.clone());

    assert_eq!(store.delete(&claim.id), Some(claim.clone()));
    assert_eq!(store.get_one(&claim.id), None);
    assert_eq!(store.delete(&claim.id), None);
}

#[test]
fn test_get_all_keys() {
    let store: InMemoryStore<Claim> = [
        ClaimBuilder::new().build(),
        ClaimBuilder::new().with_id(claim_id("f-0000000002")).build(),
    ]
    .into_iter()
    .collect();

    let keys = store.get_all_keys();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&IdFixtures::claim_id()));
    assert!(store.contains(&claim_id("f-0000000002")));
    assert_eq!(store.get_all().len(), 2);
}
