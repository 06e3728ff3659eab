//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating records that satisfy every
//! field rule, including the ones the file format adds: no delimiters and no
//! leading or trailing whitespace in free text.

use chrono::NaiveDate;
use core_kernel::{CardNumber, ClaimId, CustomerId};
use domain_claims::{Claim, ClaimStatus};
use domain_party::{CustomerRole, InsuranceCard};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid customer IDs
pub fn customer_id_strategy() -> impl Strategy<Value = CustomerId> {
    "c-[0-9]{7}".prop_map(|s| CustomerId::parse(&s).expect("generated customer ID"))
}

/// Strategy for generating valid card numbers
pub fn card_number_strategy() -> impl Strategy<Value = CardNumber> {
    "[0-9]{10}".prop_map(|s| CardNumber::parse(&s).expect("generated card number"))
}

/// Strategy for generating valid claim IDs
pub fn claim_id_strategy() -> impl Strategy<Value = ClaimId> {
    "f-[0-9]{10}".prop_map(|s| ClaimId::parse(&s).expect("generated claim ID"))
}

/// Strategy for generating person names without digits
pub fn person_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}( [A-Z][a-z]{1,10})?"
}

/// Strategy for generating single-line free text, possibly empty
pub fn free_text_strategy() -> impl Strategy<Value = String> {
    "([A-Za-z0-9][A-Za-z0-9 ]{0,15}[A-Za-z0-9])?"
}

/// Strategy for generating document references
pub fn document_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}\\.(pdf|jpg)"
}

/// Strategy for generating calendar dates between 1990 and 2039
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2040, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("generated date"))
}

/// Strategy for generating non-negative amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating claim statuses
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::New),
        Just(ClaimStatus::Processing),
        Just(ClaimStatus::Done),
    ]
}

/// Strategy for generating customer roles
pub fn role_strategy() -> impl Strategy<Value = CustomerRole> {
    prop_oneof![Just(CustomerRole::PolicyHolder), Just(CustomerRole::Dependent)]
}

/// Strategy for generating issued cards
pub fn card_strategy() -> impl Strategy<Value = InsuranceCard> {
    (
        card_number_strategy(),
        person_name_strategy(),
        person_name_strategy(),
        proptest::option::of(date_strategy()),
    )
        .prop_map(|(number, holder, owner, expiry)| InsuranceCard::new(number, holder, owner, expiry))
}

/// Strategy for generating claims
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        claim_id_strategy(),
        person_name_strategy(),
        card_number_strategy(),
        proptest::option::of(date_strategy()),
        proptest::option::of(date_strategy()),
        proptest::collection::vec(document_strategy(), 0..4),
        amount_strategy(),
        status_strategy(),
        free_text_strategy(),
    )
        .prop_map(|(id, person, card, claim_date, exam_date, documents, amount, status, banking)| {
            Claim::new(id, person, card, claim_date)
                .with_exam_date(exam_date)
                .with_documents(documents)
                .with_status(status)
                .with_receiver_banking_info(banking)
                .with_claim_amount(amount)
                .expect("generated amount is non-negative")
        })
}
