//! Custom Test Assertions
//!
//! Assertion helpers for claim lifecycle and search properties that give
//! more meaningful failure messages than bare `assert!`.

use std::collections::BTreeSet;

use core_kernel::ClaimId;
use domain_claims::Claim;

/// Asserts that two claims are identical apart from their deletion timestamp
pub fn assert_same_except_deletion(actual: &Claim, expected: &Claim) {
    let mut a = actual.clone();
    let mut e = expected.clone();
    a.deleted_at = None;
    e.deleted_at = None;
    assert_eq!(a, e, "Claims differ in fields other than deleted_at");
}

/// Asserts that every listed claim is active
pub fn assert_all_active(claims: &[Claim]) {
    for claim in claims {
        assert!(
            claim.is_active(),
            "Expected active claim, got {:?} deleted at {:?}",
            claim.id,
            claim.deleted_at
        );
    }
}

/// Asserts that every listed claim is soft-deleted
pub fn assert_all_deleted(claims: &[Claim]) {
    for claim in claims {
        assert!(
            claim.is_deleted(),
            "Expected deleted claim, got active claim {:?}",
            claim.id
        );
    }
}

/// Asserts that the active and deleted listings partition the full record set
pub fn assert_lifecycle_partition(active: &[Claim], deleted: &[Claim], all: &[Claim]) {
    assert_all_active(active);
    assert_all_deleted(deleted);

    let active_ids = ids(active);
    let deleted_ids = ids(deleted);
    assert!(
        active_ids.is_disjoint(&deleted_ids),
        "Claims appear in both listings: {:?}",
        active_ids.intersection(&deleted_ids).collect::<Vec<_>>()
    );

    let union: BTreeSet<ClaimId> = active_ids.union(&deleted_ids).copied().collect();
    assert_eq!(union, ids(all), "Listings do not cover every stored claim");
}

/// Asserts that every hit contains the query in a searchable field
pub fn assert_search_hits_match(hits: &[Claim], query: &str) {
    let needle = query.to_lowercase();
    for hit in hits {
        let matched = [&hit.claim_number, &hit.policyholder_name, &hit.policy_number]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle));
        assert!(matched, "Search hit {:?} does not contain '{}'", hit.id, query);
    }
}

/// Collects the identities of the given claims
pub fn ids(claims: &[Claim]) -> BTreeSet<ClaimId> {
    claims.iter().filter_map(|c| c.id).collect()
}
