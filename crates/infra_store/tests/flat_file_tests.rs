//! Save and reload through real files

use infra_store::config::{CARDS_FILE, CLAIMS_FILE, CUSTOMERS_FILE};
use infra_store::{
    InsuranceRegistry, LoadWarning, NewCardRequest, NewClaimRequest, NewCustomerRequest, RecordKind,
};
use test_utils::{assert_no_warnings, DataDir, IdFixtures, RecordFixtures};

#[test]
fn test_missing_files_load_empty() {
    let dir = DataDir::new();
    let outcome = dir.store().load_all();

    assert!(outcome.is_complete());
    assert_eq!(outcome.data, Default::default());
    assert_eq!(outcome.warnings.len(), 3);
    assert!(matches!(
        outcome.warnings[0],
        LoadWarning::MissingFile { kind: RecordKind::InsuranceCard, .. }
    ));
}

#[test]
fn test_holder_and_dependent_survive_reload() {
    let dir = DataDir::new();
    let files = dir.store();

    let mut registry = InsuranceRegistry::new();
    registry.add_customer(NewCustomerRequest::new("c-0000002", "Bo")).unwrap();
    registry
        .add_customer(
            NewCustomerRequest::new("c-0000001", "Ann")
                .role("policy holder")
                .card_number("1234567890")
                .dependent("c-0000002"),
        )
        .unwrap();
    registry.save(&files).unwrap();

    let outcome = files.load_all();
    assert!(outcome.is_complete());
    assert_no_warnings(&outcome.warnings);

    let (reloaded, warnings) = InsuranceRegistry::from_loaded(outcome.data);
    assert_no_warnings(&warnings);

    let ann = reloaded.customer(&IdFixtures::holder_id()).unwrap();
    assert!(ann.is_policy_holder());
    assert_eq!(ann.card_number().map(|n| n.as_str()), Some("1234567890"));
    assert_eq!(ann.dependents, vec![IdFixtures::dependent_id()]);
    assert_eq!(reloaded.dependents_of(&ann.id)[0].full_name, "Bo");
}

#[test]
fn test_saved_files_are_canonical() {
    let dir = DataDir::new();
    let files = dir.store();

    let mut registry = InsuranceRegistry::new();
    registry
        .add_card(NewCardRequest {
            card_number: "1234567890".to_string(),
            card_holder: "Ann".to_string(),
            policy_owner: "Acme Corp".to_string(),
            expiration_date: Some(test_utils::TemporalFixtures::card_expiry()),
        })
        .unwrap();
    let mut claim = NewClaimRequest::new("f-0000000001", "Ann", "1234567890");
    claim.claim_date = Some(test_utils::TemporalFixtures::claim_date());
    registry.add_claim(claim).unwrap();
    registry.save(&files).unwrap();

    assert_eq!(dir.read(CARDS_FILE), "1234567890,Ann,Acme Corp,2026-12-31\n");
    assert_eq!(dir.read(CLAIMS_FILE), "f-0000000001,2024-03-15,Ann,1234567890,,,0,New,\n");
    assert_eq!(dir.read(CUSTOMERS_FILE), "");
}

#[test]
fn test_malformed_file_fails_alone() {
    let dir = DataDir::new();
    dir.write(CARDS_FILE, "1234567890,Ann,Acme Corp,2026-12-31\n");
    dir.write(CUSTOMERS_FILE, "c-0000001,Ann,policy holder,1234567890\n");
    dir.write(CLAIMS_FILE, "f-0000000001,not-a-date,Ann,1234567890,,,0,New,\n");

    let outcome = dir.store().load_all();
    assert!(!outcome.is_complete());
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].is_malformed());
    assert!(outcome.data.claims.is_empty());
    assert_eq!(outcome.data.customers.len(), 1);
    assert_eq!(outcome.data.cards, vec![RecordFixtures::ann_card()]);
}
