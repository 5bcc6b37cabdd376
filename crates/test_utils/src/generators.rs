//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim records and search queries.

use chrono::{Duration, NaiveDateTime};
use domain_claims::Claim;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::TemporalFixtures;

/// Strategy for short claim numbers; duplicates are likely, so callers make them unique
pub fn claim_number_strategy() -> impl Strategy<Value = String> {
    "CLM-[0-9]{1,4}"
}

/// Strategy for policyholder names
pub fn policyholder_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Raj Kumar".to_string()),
        Just("Priya Sharma".to_string()),
        Just("Amit Patel".to_string()),
        Just("Sneha Gupta".to_string()),
        "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}",
    ]
}

/// Strategy for optional amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((0i64..50_000_000i64).prop_map(|cents| Decimal::new(cents, 2)))
}

/// Strategy for an optional timestamp within a year of the fixture date
pub fn timestamp_strategy() -> impl Strategy<Value = Option<NaiveDateTime>> {
    proptest::option::of(
        (0i64..365 * 24 * 60)
            .prop_map(|minutes| TemporalFixtures::incident_date() + Duration::minutes(minutes)),
    )
}

/// Strategy for unsaved claims in any lifecycle and fraud state
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        claim_number_strategy(),
        policyholder_strategy(),
        proptest::option::of("POL-[0-9]{3}"),
        amount_strategy(),
        proptest::option::of(any::<bool>()),
        timestamp_strategy(),
    )
        .prop_map(|(number, holder, policy, amount, fraudulent, deleted_at)| Claim {
            claim_number: Some(number),
            policyholder_name: Some(holder),
            policy_number: policy,
            amount,
            is_fraudulent: fraudulent,
            deleted_at,
            status: Some("PENDING".to_string()),
            ..Default::default()
        })
}

/// Strategy for a batch of claims with unique claim numbers
pub fn claim_batch_strategy(max: usize) -> impl Strategy<Value = Vec<Claim>> {
    proptest::collection::vec(claim_strategy(), 0..max).prop_map(|claims| {
        claims
            .into_iter()
            .enumerate()
            .map(|(i, mut claim)| {
                let number = claim.claim_number.take().unwrap_or_default();
                claim.claim_number = Some(format!("{}-{}", number, i));
                claim
            })
            .collect()
    })
}

/// Strategy for search queries, biased toward fragments that occur in generated claims
pub fn search_query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("clm".to_string()),
        Just("KUMAR".to_string()),
        Just("pol-1".to_string()),
        Just("a".to_string()),
        "[a-zA-Z0-9 -]{0,4}",
    ]
}
