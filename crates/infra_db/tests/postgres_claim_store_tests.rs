//! PostgreSQL claim store tests
//!
//! These run against a throwaway PostgreSQL container and need Docker:
//!
//! ```bash
//! cargo test -p infra_db -- --ignored
//! ```

use core_kernel::ClaimId;
use rust_decimal_macros::dec;
use domain_claims::ClaimStore;
use infra_db::PostgresClaimStore;
use test_utils::{
    assert_lifecycle_partition, assert_search_hits_match, create_isolated_test_database,
    ClaimBuilder, ClaimFixtures, TemporalFixtures,
};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_assigns_identity_and_round_trips() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresClaimStore::new(db.pool().clone());

    let saved = store.save(ClaimFixtures::raj_kumar()).await.unwrap();
    let id = saved.id.expect("identity assigned on insert");

    let loaded = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.amount, ClaimFixtures::raj_kumar().amount);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_lifecycle_filters_and_fraud_listing() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresClaimStore::new(db.pool().clone());

    let mut all = Vec::new();
    for claim in ClaimFixtures::dashboard_claims() {
        all.push(store.save(claim).await.unwrap());
    }

    let mut deleted = all[0].clone();
    deleted.mark_deleted(TemporalFixtures::deleted_at());
    all[0] = store.save(deleted).await.unwrap();

    let active = store.find_active().await.unwrap();
    let removed = store.find_deleted().await.unwrap();
    assert_lifecycle_partition(&active, &removed, &all);

    let fraudulent = store.find_active_fraudulent().await.unwrap();
    let numbers: Vec<_> = fraudulent.iter().filter_map(|c| c.claim_number.as_deref()).collect();
    assert_eq!(numbers, vec!["C3", "C4"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_is_case_insensitive_and_literal() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresClaimStore::new(db.pool().clone());

    for claim in ClaimFixtures::dashboard_claims() {
        store.save(claim).await.unwrap();
    }
    store
        .save(ClaimBuilder::new().with_claim_number("50%_OFF").build())
        .await
        .unwrap();

    let hits = store.search_active("sHaRmA").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_search_hits_match(&hits, "sHaRmA");

    let literal = store.search_active("%_").await.unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].claim_number.as_deref(), Some("50%_OFF"));

    assert!(store.search_deleted("sharma").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_claim_number_is_conflict() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresClaimStore::new(db.pool().clone());

    store.save(ClaimFixtures::jane_doe()).await.unwrap();
    let err = store.save(ClaimFixtures::jane_doe()).await.unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_replace_unknown_identity_is_not_found() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresClaimStore::new(db.pool().clone());

    let err = store
        .save(ClaimFixtures::jane_doe().with_id(ClaimId::new(404)))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_amount_keeps_full_precision() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresClaimStore::new(db.pool().clone());

    let saved = store
        .save(ClaimBuilder::new().with_amount(dec!(1234.5678)).build())
        .await
        .unwrap();

    let loaded = store.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(loaded.amount, Some(dec!(1234.5678)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_folds_query_case_in_database() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PostgresClaimStore::new(db.pool().clone());

    store
        .save(ClaimBuilder::new().with_policyholder("amit patel").build())
        .await
        .unwrap();

    let hits = store.search_active("AMIT PATEL").await.unwrap();
    assert_eq!(hits.len(), 1);
}
