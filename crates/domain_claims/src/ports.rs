//! Claims Domain Ports
//!
//! This module defines the storage port for claim records. The service layer
//! depends only on this trait; adapters provide the actual persistence:
//!
//! - **PostgreSQL adapter**: `infra_db::adapters::PostgresClaimStore`
//! - **In-memory adapter**: [`mock::InMemoryClaimStore`], behind the `mock` feature
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_claims::{ClaimService, ClaimStore};
//!
//! let store: Arc<dyn ClaimStore> = Arc::new(PostgresClaimStore::new(pool));
//! let service = ClaimService::new(store);
//! ```

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PortError};

use crate::claim::Claim;

/// Storage port for claim records
///
/// List results are ordered by identity ascending.
#[async_trait]
pub trait ClaimStore: DomainPort + HealthCheckable {
    /// Retrieves a claim by identity, including soft-deleted ones
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Retrieves a claim by exact claim number
    async fn find_by_claim_number(&self, claim_number: &str) -> Result<Option<Claim>, PortError>;

    /// Lists claims that have not been soft-deleted
    async fn find_active(&self) -> Result<Vec<Claim>, PortError>;

    /// Lists active claims whose fraud flag is set
    async fn find_active_fraudulent(&self) -> Result<Vec<Claim>, PortError>;

    /// Lists soft-deleted claims
    async fn find_deleted(&self) -> Result<Vec<Claim>, PortError>;

    /// Searches active claims by claim number, policyholder name, or policy number
    async fn search_active(&self, query: &str) -> Result<Vec<Claim>, PortError>;

    /// Searches soft-deleted claims with the same matching as `search_active`
    async fn search_deleted(&self, query: &str) -> Result<Vec<Claim>, PortError>;

    /// Inserts the claim when it has no identity, otherwise replaces the stored record
    ///
    /// # Returns
    ///
    /// The persisted record, with its identity assigned on insert
    ///
    /// # Errors
    ///
    /// * `PortError::NotFound` if the claim carries an identity that is not stored
    /// * `PortError::Conflict` if the claim number is already used by another record
    async fn save(&self, claim: Claim) -> Result<Claim, PortError>;
}

/// In-memory implementation of ClaimStore for testing
///
/// Records live in a `BTreeMap` keyed by identity so listings come back in
/// identity order, matching the PostgreSQL adapter.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    use crate::search::{matches_query, SearchScope};

    #[derive(Debug, Default)]
    struct StoreState {
        claims: BTreeMap<ClaimId, Claim>,
        last_id: i64,
    }

    /// In-memory claim store
    #[derive(Debug, Default, Clone)]
    pub struct InMemoryClaimStore {
        state: Arc<RwLock<StoreState>>,
        writes: Arc<AtomicU64>,
    }

    impl InMemoryClaimStore {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store through `save`, returning the stored records
        pub async fn with_claims(claims: Vec<Claim>) -> Result<(Self, Vec<Claim>), PortError> {
            let store = Self::new();
            let mut saved = Vec::with_capacity(claims.len());
            for claim in claims {
                saved.push(store.save(claim).await?);
            }
            Ok((store, saved))
        }

        /// Returns every stored record regardless of lifecycle state
        pub async fn snapshot(&self) -> Vec<Claim> {
            self.state.read().await.claims.values().cloned().collect()
        }

        /// Number of successful saves performed so far
        pub fn write_count(&self) -> u64 {
            self.writes.load(Ordering::SeqCst)
        }

        async fn list(&self, scope: SearchScope, filter: impl Fn(&Claim) -> bool) -> Vec<Claim> {
            self.state
                .read()
                .await
                .claims
                .values()
                .filter(|c| scope.admits(c) && filter(*c))
                .cloned()
                .collect()
        }
    }

    impl DomainPort for InMemoryClaimStore {}

    #[async_trait]
    impl HealthCheckable for InMemoryClaimStore {
        async fn health_check(&self) -> HealthCheckResult {
            let mut result = HealthCheckResult::healthy("in-memory-claim-store", 0);
            result.message = Some("In-memory store always healthy".to_string());
            result
        }
    }

    #[async_trait]
    impl ClaimStore for InMemoryClaimStore {
        async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
            Ok(self.state.read().await.claims.get(&id).cloned())
        }

        async fn find_by_claim_number(&self, claim_number: &str) -> Result<Option<Claim>, PortError> {
            Ok(self
                .state
                .read()
                .await
                .claims
                .values()
                .find(|c| c.claim_number.as_deref() == Some(claim_number))
                .cloned())
        }

        async fn find_active(&self) -> Result<Vec<Claim>, PortError> {
            Ok(self.list(SearchScope::Active, |_| true).await)
        }

        async fn find_active_fraudulent(&self) -> Result<Vec<Claim>, PortError> {
            Ok(self.list(SearchScope::Active, Claim::is_flagged_fraudulent).await)
        }

        async fn find_deleted(&self) -> Result<Vec<Claim>, PortError> {
            Ok(self.list(SearchScope::Deleted, |_| true).await)
        }

        async fn search_active(&self, query: &str) -> Result<Vec<Claim>, PortError> {
            Ok(self.list(SearchScope::Active, |c| matches_query(c, query)).await)
        }

        async fn search_deleted(&self, query: &str) -> Result<Vec<Claim>, PortError> {
            Ok(self.list(SearchScope::Deleted, |c| matches_query(c, query)).await)
        }

        async fn save(&self, mut claim: Claim) -> Result<Claim, PortError> {
            let mut state = self.state.write().await;

            if let Some(number) = claim.claim_number.as_deref() {
                let taken = state
                    .claims
                    .values()
                    .any(|c| c.id != claim.id && c.claim_number.as_deref() == Some(number));
                if taken {
                    return Err(PortError::conflict(format!(
                        "claim number '{}' already exists",
                        number
                    )));
                }
            }

            let id = match claim.id {
                Some(id) if state.claims.contains_key(&id) => id,
                Some(id) => return Err(PortError::not_found("Claim", id)),
                None => {
                    state.last_id += 1;
                    ClaimId::new(state.last_id)
                }
            };

            claim.id = Some(id);
            state.claims.insert(id, claim.clone());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(claim)
        }
    }
}
