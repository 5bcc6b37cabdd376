//! In-memory service wiring for tests

use std::sync::Arc;

use domain_claims::{Claim, ClaimService, InMemoryClaimStore};

/// A claim service backed by an in-memory store the test can inspect
pub struct ClaimHarness {
    pub store: InMemoryClaimStore,
    pub service: ClaimService,
    /// The seed claims as stored, with identities assigned
    pub seeded: Vec<Claim>,
}

impl ClaimHarness {
    /// Creates a harness over an empty store
    pub fn empty() -> Self {
        let store = InMemoryClaimStore::new();
        let service = ClaimService::new(Arc::new(store.clone()));
        Self {
            store,
            service,
            seeded: Vec::new(),
        }
    }

    /// Creates a harness pre-populated with the given claims
    ///
    /// # Panics
    ///
    /// Panics if the seed claims violate the claim-number uniqueness constraint
    pub async fn seeded(claims: Vec<Claim>) -> Self {
        let (store, seeded) = InMemoryClaimStore::with_claims(claims)
            .await
            .expect("seed claims must have unique claim numbers");
        let service = ClaimService::new(Arc::new(store.clone()));
        Self {
            store,
            service,
            seeded,
        }
    }
}
