//! Tests for encoding and decoding record files

use std::collections::BTreeSet;

use infra_store::codec::{decode, encode, CardCodec, ClaimCodec, CustomerCodec};
use infra_store::{CodecError, LoadWarning, RecordKind};
use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_claims::{Claim, ClaimStatus};
use test_utils::{claim_strategy, card_strategy, CardBuilder, ClaimBuilder, CustomerBuilder, IdFixtures};

// ============================================================================
// Claim Lines
// ============================================================================

mod claim_lines {
    use super::*;

    #[test]
    fn test_encode_claim_line() {
        let claim = ClaimBuilder::new()
            .with_documents(vec!["a.pdf".to_string(), "b.pdf".to_string()])
            .build();
        let text = encode::<ClaimCodec, _>([&claim]).unwrap();
        assert_eq!(
            text,
            "f-0000000001,2024-03-15,Ann,1234567890,2024-03-01,a.pdf;b.pdf,150.00,New,ACME Bank 0001\n"
        );
    }

    #[test]
    fn test_empty_documents_column() {
        let text = "f-0000000001,2024-03-15,Ann,1234567890,,,0,Processing,\n";
        let decoded = decode::<ClaimCodec>(text).unwrap();
        let claim = &decoded.records[0];

        assert!(claim.documents.is_empty());
        assert_eq!(claim.exam_date, None);
        assert_eq!(claim.status, ClaimStatus::Processing);
        assert_eq!(claim.claim_amount(), dec!(0));
        assert_eq!(claim.receiver_banking_info, "");
    }

    #[test]
    fn test_status_is_normalized() {
        let text = "f-0000000001,2024-03-15,Ann,1234567890,,,10,done,\n";
        let decoded = decode::<ClaimCodec>(text).unwrap();
        assert_eq!(decoded.records[0].status, ClaimStatus::Done);

        let written = encode::<ClaimCodec, _>(&decoded.records).unwrap();
        assert!(written.contains(",Done,"));
    }

    #[test]
    fn test_negative_amount_is_fatal() {
        let text = "f-0000000001,2024-03-15,Ann,1234567890,,,-1,New,\n";
        let error = decode::<ClaimCodec>(text).unwrap_err();
        assert!(matches!(error, CodecError::Malformed { column: "claimAmount", .. }));
    }

    #[test]
    fn test_values_trimmed_on_decode_are_unencodable() {
        let padded_name = ClaimBuilder::new().with_insured_person(" Ann ").build();
        let error = encode::<ClaimCodec, _>([&padded_name]).unwrap_err();
        assert!(matches!(error, CodecError::Unencodable { field: "insuredPerson", .. }));

        let empty_document = ClaimBuilder::new()
            .with_documents(vec![String::new(), "a.pdf".to_string()])
            .build();
        let error = encode::<ClaimCodec, _>([&empty_document]).unwrap_err();
        assert!(matches!(error, CodecError::Unencodable { field: "documents", .. }));

        let padded_document = ClaimBuilder::new().with_documents(vec![" a.pdf".to_string()]).build();
        assert!(encode::<ClaimCodec, _>([&padded_document]).is_err());

        let padded_banking = ClaimBuilder::new().with_receiver_banking_info(" IBAN 1 ").build();
        let error = encode::<ClaimCodec, _>([&padded_banking]).unwrap_err();
        assert!(matches!(error, CodecError::Unencodable { field: "receiverBankingInfo", .. }));
    }

    #[test]
    fn test_unencodable_banking_info() {
        let claim = ClaimBuilder::new().with_receiver_banking_info("Bank, Branch").build();
        let error = encode::<ClaimCodec, _>([&claim]).unwrap_err();
        assert!(matches!(error, CodecError::Unencodable { field: "receiverBankingInfo", .. }));
    }
}

// ============================================================================
// File Rules
// ============================================================================

mod file_rules {
    use super::*;

    #[test]
    fn test_blank_lines_are_ignored() {
        let text = "\n1234567890,Ann,Acme,2026-12-31\n\n   \n";
        let decoded = decode::<CardCodec>(text).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_line_keeps_first() {
        let text = "1234567890,Ann,Acme,2026-12-31\n1234567890,Bo,Other,2027-01-01\n";
        let decoded = decode::<CardCodec>(text).unwrap();

        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].card_holder, "Ann");
        assert_eq!(
            decoded.warnings,
            vec![LoadWarning::DuplicateKey {
                kind: RecordKind::InsuranceCard,
                line: 2,
                key: "1234567890".to_string(),
            }]
        );
    }

    #[test]
    fn test_invalid_key_is_skipped() {
        let text = "12345,Ann,Acme,2026-12-31\n0987654321,Bo,Acme,\n";
        let decoded = decode::<CardCodec>(text).unwrap();

        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].card_number, IdFixtures::other_card_number());
        assert!(matches!(decoded.warnings[0], LoadWarning::InvalidKey { line: 1, .. }));
    }

    #[test]
    fn test_wrong_column_count_is_fatal() {
        let text = "1234567890,Ann,Acme\n";
        let error = decode::<CardCodec>(text).unwrap_err();
        assert!(error.is_malformed());
        assert!(matches!(error, CodecError::ColumnCount { line: 1, found: 3, .. }));
    }

    #[test]
    fn test_padded_card_holder_is_unencodable() {
        let card = CardBuilder::new().with_holder("Ann ").build();
        let error = encode::<CardCodec, _>([&card]).unwrap_err();
        assert!(matches!(error, CodecError::Unencodable { field: "cardHolder", .. }));
    }

    #[test]
    fn test_malformed_date_is_fatal() {
        let text = "1234567890,Ann,Acme,2024-02-30\n";
        let error = decode::<CardCodec>(text).unwrap_err();
        assert!(matches!(error, CodecError::Malformed { column: "expirationDate", .. }));
    }
}

// ============================================================================
// Customer Lines
// ============================================================================

mod customer_lines {
    use super::*;

    #[test]
    fn test_dependents_column() {
        let customer = CustomerBuilder::new()
            .with_id(IdFixtures::holder_id())
            .with_name("Ann")
            .policy_holder()
            .with_card_number(IdFixtures::card_number())
            .with_dependent(IdFixtures::dependent_id())
            .build();

        let text = encode::<CustomerCodec, _>([&customer]).unwrap();
        assert_eq!(text, "c-0000001,Ann,policy holder,1234567890,c-0000002\n");

        let decoded = decode::<CustomerCodec>(&text).unwrap();
        assert_eq!(decoded.records, vec![customer]);
    }

    #[test]
    fn test_bad_role_is_fatal() {
        let error = decode::<CustomerCodec>("c-0000001,Ann,owner,\n").unwrap_err();
        assert!(matches!(error, CodecError::Malformed { column: "role", .. }));
    }

    #[test]
    fn test_card_written_without_details() {
        let card = CardBuilder::new().build();
        let customer = CustomerBuilder::new().with_card(card).build();
        let text = encode::<CustomerCodec, _>([&customer]).unwrap();
        assert_eq!(text, "c-0000002,Bo,dependent,1234567890,\n");
    }
}

/// Claims with distinct IDs, in generation order
fn distinct_claims() -> impl Strategy<Value = Vec<Claim>> {
    proptest::collection::vec(claim_strategy(), 0..8).prop_map(|claims| {
        let mut seen = BTreeSet::new();
        claims
            .into_iter()
            .filter(|claim| seen.insert(claim.id.clone()))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_claim_set_survives_file_round_trip(claims in distinct_claims()) {
        let text = encode::<ClaimCodec, _>(&claims).unwrap();
        let decoded = decode::<ClaimCodec>(&text).unwrap();
        prop_assert!(decoded.warnings.is_empty());
        prop_assert_eq!(decoded.records, claims);
    }

    #[test]
    fn prop_claim_survives_file_round_trip(claim in claim_strategy()) {
        let text = encode::<ClaimCodec, _>([&claim]).unwrap();
        let decoded = decode::<ClaimCodec>(&text).unwrap();
        prop_assert!(decoded.warnings.is_empty());
        prop_assert_eq!(decoded.records, vec![claim]);
    }

    #[test]
    fn prop_card_survives_file_round_trip(card in card_strategy()) {
        let text = encode::<CardCodec, _>([&card]).unwrap();
        let decoded = decode::<CardCodec>(&text).unwrap();
        prop_assert_eq!(decoded.records, vec![card]);
    }
}
