//! Tests for the registry's validation rules

use rust_decimal_macros::dec;

use domain_claims::ClaimStatus;
use domain_party::PartyError;
use infra_store::{
    InsuranceRegistry, LoadWarning, LoadedData, NewCardRequest, NewClaimRequest, NewCustomerRequest,
    RecordStore, StoreError, UpdateClaimRequest, UpdateCustomerRequest,
};
use test_utils::{
    assert_duplicate, assert_not_found, assert_validation_error, card_number, claim_id, customer_id,
    CardBuilder, CustomerBuilder, IdFixtures,
};

fn holder_request(id: &str, name: &str) -> NewCustomerRequest {
    NewCustomerRequest::new(id, name).role("policy holder")
}

fn card_request(number: &str) -> NewCardRequest {
    NewCardRequest {
        card_number: number.to_string(),
        card_holder: "Ann".to_string(),
        policy_owner: "Acme Corp".to_string(),
        expiration_date: None,
    }
}

/// Ann (holder, card 1234567890) and Bo (dependent of Ann)
fn ann_and_bo() -> InsuranceRegistry {
    let mut registry = InsuranceRegistry::new();
    registry
        .add_customer(NewCustomerRequest::new("c-0000002", "Bo"))
        .unwrap();
    registry
        .add_customer(
            holder_request("c-0000001", "Ann")
                .card_number("1234567890")
                .dependent("c-0000002"),
        )
        .unwrap();
    registry
}

// ============================================================================
// Customer Tests
// ============================================================================

mod customer_tests {
    use super::*;

    #[test]
    fn test_add_customer_registers_card() {
        let registry = ann_and_bo();
        let ann = registry.customer(&IdFixtures::holder_id()).unwrap();

        assert_eq!(ann.card_number(), Some(&IdFixtures::card_number()));
        assert!(registry.card(&IdFixtures::card_number()).is_some());
        assert_eq!(
            registry.owner_of_card(&IdFixtures::card_number()).map(|c| &c.id),
            Some(&IdFixtures::holder_id())
        );
    }

    #[test]
    fn test_duplicate_customer_rejected() {
        let mut registry = ann_and_bo();
        assert_duplicate(registry.add_customer(NewCustomerRequest::new("c-0000001", "Cy")));
        assert_eq!(registry.customer(&IdFixtures::holder_id()).unwrap().full_name, "Ann");
    }

    #[test]
    fn test_name_with_digit_rejected() {
        let mut registry = InsuranceRegistry::new();
        assert_validation_error(registry.add_customer(NewCustomerRequest::new("c-0000001", "Ann 2")));
        assert!(registry.customers().is_empty());
    }

    #[test]
    fn test_card_owned_by_other_customer() {
        let mut registry = ann_and_bo();
        let result = registry.add_customer(holder_request("c-0000003", "Cy").card_number("1234567890"));
        assert!(matches!(result, Err(StoreError::CardOwned { .. })));
        assert!(registry.customer(&customer_id("c-0000003")).is_none());
    }

    #[test]
    fn test_unknown_dependent_rejected() {
        let mut registry = InsuranceRegistry::new();
        assert_not_found(registry.add_customer(holder_request("c-0000001", "Ann").dependent("c-0000009")));
        assert!(registry.customers().is_empty());
    }

    #[test]
    fn test_update_customer_renumbers_card() {
        let mut registry = ann_and_bo();
        let new_number = IdFixtures::other_card_number();
        let request = UpdateCustomerRequest {
            full_name: Some("Ann Lee".to_string()),
            card_number: Some(new_number.to_string()),
        };

        let updated = registry
            .update_customer(&IdFixtures::holder_id(), request)
            .unwrap()
            .unwrap();

        assert_eq!(updated.full_name, "Ann Lee");
        assert_eq!(updated.card_number(), Some(&new_number));
        assert!(registry.card(&new_number).is_some());
        assert!(registry.card(&IdFixtures::card_number()).is_none());
    }

    #[test]
    fn test_update_cardless_customer_gets_card() {
        let mut registry = ann_and_bo();
        let request = UpdateCustomerRequest {
            full_name: None,
            card_number: Some("0987654321".to_string()),
        };
        let bo = registry
            .update_customer(&IdFixtures::dependent_id(), request)
            .unwrap()
            .unwrap();
        assert_eq!(bo.card_number(), Some(&IdFixtures::other_card_number()));
    }

    #[test]
    fn test_update_missing_customer() {
        let mut registry = InsuranceRegistry::new();
        let result = registry.update_customer(&IdFixtures::holder_id(), UpdateCustomerRequest::default());
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_delete_customer_leaves_dangling_link() {
        let mut registry = ann_and_bo();
        assert!(registry.delete_customer(&IdFixtures::dependent_id()).is_some());

        assert!(registry.dependents_of(&IdFixtures::holder_id()).is_empty());
        assert_eq!(
            registry.dangling_dependents(&IdFixtures::holder_id()),
            vec![IdFixtures::dependent_id()]
        );
        assert!(registry.delete_customer(&IdFixtures::dependent_id()).is_none());
    }
}

// ============================================================================
// Dependent Tests
// ============================================================================

mod dependent_tests {
    use super::*;

    #[test]
    fn test_dependents_of() {
        let registry = ann_and_bo();
        let dependents = registry.dependents_of(&IdFixtures::holder_id());
        assert_eq!(dependents.len(), 1);
        assert_eq!(dependents[0].full_name, "Bo");
    }

    #[test]
    fn test_dependent_must_be_listed_under_holder() {
        let mut registry = ann_and_bo();
        let result = registry.add_dependent(&IdFixtures::dependent_id(), &IdFixtures::holder_id());
        assert!(matches!(result, Err(StoreError::Party(PartyError::NotPolicyHolder(_)))));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut registry = InsuranceRegistry::new();
        registry.add_customer(holder_request("c-0000001", "Ann")).unwrap();
        registry
            .add_customer(holder_request("c-0000002", "Bo").dependent("c-0000001"))
            .unwrap();

        let result = registry.add_dependent(&customer_id("c-0000001"), &customer_id("c-0000002"));
        assert!(matches!(
            result,
            Err(StoreError::Party(PartyError::CircularDependency { .. }))
        ));
        assert!(!registry.customer(&customer_id("c-0000001")).unwrap().has_dependent(&customer_id("c-0000002")));
    }

    #[test]
    fn test_policy_holder_may_be_listed_as_dependent() {
        let mut registry = InsuranceRegistry::new();
        registry.add_customer(holder_request("c-0000001", "Ann")).unwrap();
        registry.add_customer(holder_request("c-0000002", "Bo")).unwrap();

        registry
            .add_dependent(&customer_id("c-0000001"), &customer_id("c-0000002"))
            .unwrap();
        assert_eq!(registry.dependents_of(&customer_id("c-0000001"))[0].full_name, "Bo");
    }

    #[test]
    fn test_duplicate_dependent_rejected() {
        let mut registry = ann_and_bo();
        let result = registry.add_dependent(&IdFixtures::holder_id(), &IdFixtures::dependent_id());
        assert!(matches!(
            result,
            Err(StoreError::Party(PartyError::DuplicateDependent { .. }))
        ));
    }

    #[test]
    fn test_add_dependent_requires_both_customers() {
        let mut registry = ann_and_bo();
        assert_not_found(registry.add_dependent(&IdFixtures::holder_id(), &customer_id("c-0000009")));
        assert_not_found(registry.add_dependent(&customer_id("c-0000009"), &IdFixtures::holder_id()));
    }

    #[test]
    fn test_remove_dependent() {
        let mut registry = ann_and_bo();
        assert!(registry.remove_dependent(&IdFixtures::holder_id(), &IdFixtures::dependent_id()));
        assert!(!registry.remove_dependent(&IdFixtures::holder_id(), &IdFixtures::dependent_id()));
        assert!(registry.dependents_of(&IdFixtures::holder_id()).is_empty());
    }
}

// ============================================================================
// Card Tests
// ============================================================================

mod card_tests {
    use super::*;

    #[test]
    fn test_add_card_issues_number_only_card() {
        let mut registry = ann_and_bo();
        let card = registry.add_card(card_request("1234567890")).unwrap();

        assert!(card.is_issued());
        let ann = registry.customer(&IdFixtures::holder_id()).unwrap();
        assert_eq!(ann.insurance_card.as_ref(), Some(&card));
    }

    #[test]
    fn test_add_issued_card_twice_rejected() {
        let mut registry = InsuranceRegistry::new();
        registry.add_card(card_request("1234567890")).unwrap();
        assert_duplicate(registry.add_card(card_request("1234567890")));
    }

    #[test]
    fn test_bad_card_number_rejected() {
        let mut registry = InsuranceRegistry::new();
        assert_validation_error(registry.add_card(card_request("12345")));
        assert!(registry.cards().is_empty());
    }

    #[test]
    fn test_assign_card() {
        let mut registry = ann_and_bo();
        registry.add_card(card_request("0987654321")).unwrap();
        registry
            .assign_card(&IdFixtures::dependent_id(), &IdFixtures::other_card_number())
            .unwrap();

        assert_eq!(
            registry.owner_of_card(&IdFixtures::other_card_number()).map(|c| &c.id),
            Some(&IdFixtures::dependent_id())
        );
        assert_not_found(registry.assign_card(&IdFixtures::dependent_id(), &card_number("5555555555")));
    }

    #[test]
    fn test_delete_card_detaches_owner() {
        let mut registry = ann_and_bo();
        assert!(registry.delete_card(&IdFixtures::card_number()).is_some());
        assert_eq!(registry.customer(&IdFixtures::holder_id()).unwrap().insurance_card, None);
    }
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    fn claim_request(id: &str) -> NewClaimRequest {
        let mut request = NewClaimRequest::new(id, "Ann", "1234567890");
        request.claim_amount = dec!(120.50);
        request.documents = vec!["receipt.pdf".to_string()];
        request
    }

    #[test]
    fn test_bad_claim_id_leaves_store_unchanged() {
        let mut registry = InsuranceRegistry::new();
        assert_validation_error(registry.add_claim(claim_request("f-123")));
        assert!(registry.claims().is_empty());
    }

    #[test]
    fn test_duplicate_claim_rejected() {
        let mut registry = InsuranceRegistry::new();
        registry.add_claim(claim_request("f-0000000001")).unwrap();
        assert_duplicate(registry.add_claim(claim_request("f-0000000001")));
        assert_eq!(registry.claims().len(), 1);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut registry = InsuranceRegistry::new();
        let mut request = claim_request("f-0000000001");
        request.claim_amount = dec!(-1);
        assert!(matches!(registry.add_claim(request), Err(StoreError::Claim(_))));
    }

    #[test]
    fn test_update_claim_status() {
        let mut registry = InsuranceRegistry::new();
        registry.add_claim(claim_request("f-0000000001")).unwrap();

        let request = UpdateClaimRequest {
            status: Some("processing".to_string()),
            ..Default::default()
        };
        let updated = registry
            .update_claim(&IdFixtures::claim_id(), request)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, ClaimStatus::Processing);
        assert_eq!(updated.claim_amount(), dec!(120.50));

        let bad = UpdateClaimRequest {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert_validation_error(registry.update_claim(&IdFixtures::claim_id(), bad));
        assert_eq!(registry.claim(&IdFixtures::claim_id()).unwrap().status, ClaimStatus::Processing);
    }

    #[test]
    fn test_claims_for_customer() {
        let mut registry = ann_and_bo();
        registry.add_claim(claim_request("f-0000000001")).unwrap();
        registry.add_claim(claim_request("f-0000000002")).unwrap();

        assert_eq!(registry.claims_for_customer(&IdFixtures::holder_id()).len(), 2);
        assert!(registry.claims_for_customer(&IdFixtures::dependent_id()).is_empty());
        assert!(registry.delete_claim(&claim_id("f-0000000002")).is_some());
        assert_eq!(registry.claims_for_card(&IdFixtures::card_number()).len(), 1);
    }
}

// ============================================================================
// Loading Tests
// ============================================================================

mod loading_tests {
    use super::*;

    #[test]
    fn test_from_loaded_attaches_full_cards() {
        let data = LoadedData {
            customers: vec![CustomerBuilder::new()
                .with_id(IdFixtures::holder_id())
                .with_name("Ann")
                .policy_holder()
                .with_card_number(IdFixtures::card_number())
                .build()],
            cards: vec![CardBuilder::new().build()],
            claims: Vec::new(),
        };

        let (registry, warnings) = InsuranceRegistry::from_loaded(data);
        assert!(warnings.is_empty());
        let ann = registry.customer(&IdFixtures::holder_id()).unwrap();
        assert!(ann.insurance_card.as_ref().unwrap().is_issued());
    }

    #[test]
    fn test_from_loaded_registers_unknown_card() {
        let data = LoadedData {
            customers: vec![CustomerBuilder::new().with_card_number(IdFixtures::card_number()).build()],
            ..Default::default()
        };
        let (registry, _) = InsuranceRegistry::from_loaded(data);
        assert!(!registry.card(&IdFixtures::card_number()).unwrap().is_issued());
    }

    #[test]
    fn test_from_loaded_warns_on_dangling_and_shared() {
        let data = LoadedData {
            customers: vec![
                CustomerBuilder::new()
                    .with_id(IdFixtures::holder_id())
                    .policy_holder()
                    .with_card_number(IdFixtures::card_number())
                    .with_dependent(customer_id("c-0000009"))
                    .build(),
                CustomerBuilder::new().with_card_number(IdFixtures::card_number()).build(),
            ],
            ..Default::default()
        };

        let (_, warnings) = InsuranceRegistry::from_loaded(data);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| matches!(w, LoadWarning::SharedCard { .. })));
        assert!(warnings.contains(&LoadWarning::DanglingDependent {
            holder: IdFixtures::holder_id(),
            dependent: customer_id("c-0000009"),
        }));
    }

    #[test]
    fn test_delete_shared_card_detaches_every_holder() {
        let data = LoadedData {
            customers: vec![
                CustomerBuilder::new()
                    .with_id(IdFixtures::holder_id())
                    .with_card_number(IdFixtures::card_number())
                    .build(),
                CustomerBuilder::new().with_card_number(IdFixtures::card_number()).build(),
            ],
            ..Default::default()
        };
        let (mut registry, _) = InsuranceRegistry::from_loaded(data);

        assert!(registry.delete_card(&IdFixtures::card_number()).is_some());
        assert!(registry.customers().iter().all(|c| c.insurance_card.is_none()));
    }
}
