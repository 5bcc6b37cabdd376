//! PostgreSQL Claim Store
//!
//! Implements the domain's `ClaimStore` port over `ClaimsRepository`.
//! Rows are converted to domain claims and `DatabaseError`s are translated to
//! `PortError`s:
//!
//! - `DatabaseError::NotFound` -> `PortError::NotFound`
//! - `DatabaseError::DuplicateEntry` -> `PortError::Conflict`
//! - connection and pool failures -> `PortError::Connection`
//! - anything else -> `PortError::Internal`

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_claims::{Claim, ClaimStore, SearchScope};

use crate::repositories::claims::{ClaimRow, ClaimsRepository};

const ADAPTER_ID: &str = "postgres-claim-store";

/// PostgreSQL-backed implementation of the ClaimStore trait
#[derive(Debug, Clone)]
pub struct PostgresClaimStore {
    repository: ClaimsRepository,
    pool: PgPool,
}

impl PostgresClaimStore {
    /// Creates a new PostgreSQL claim store
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClaimsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &ClaimsRepository {
        &self.repository
    }
}

fn into_claims(rows: Vec<ClaimRow>) -> Vec<Claim> {
    rows.into_iter().map(Claim::from).collect()
}

impl DomainPort for PostgresClaimStore {}

#[async_trait]
impl HealthCheckable for PostgresClaimStore {
    /// Performs a `SELECT 1` to verify the pool can reach the database
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => HealthCheckResult::unhealthy(
                ADAPTER_ID,
                latency_ms,
                format!("Database error: {}", e),
            ),
        }
    }
}

#[async_trait]
impl ClaimStore for PostgresClaimStore {
    #[instrument(skip(self), fields(claim_id = %id))]
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        let row = self.repository.get_by_id(id).await?;
        Ok(row.map(Claim::from))
    }

    #[instrument(skip(self))]
    async fn find_by_claim_number(&self, claim_number: &str) -> Result<Option<Claim>, PortError> {
        let row = self.repository.get_by_claim_number(claim_number).await?;
        Ok(row.map(Claim::from))
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> Result<Vec<Claim>, PortError> {
        let rows = self.repository.find_active().await?;
        Ok(into_claims(rows))
    }

    #[instrument(skip(self))]
    async fn find_active_fraudulent(&self) -> Result<Vec<Claim>, PortError> {
        let rows = self.repository.find_active_fraudulent().await?;
        Ok(into_claims(rows))
    }

    #[instrument(skip(self))]
    async fn find_deleted(&self) -> Result<Vec<Claim>, PortError> {
        let rows = self.repository.find_deleted().await?;
        Ok(into_claims(rows))
    }

    #[instrument(skip(self))]
    async fn search_active(&self, query: &str) -> Result<Vec<Claim>, PortError> {
        let rows = self.repository.search(query, SearchScope::Active).await?;
        Ok(into_claims(rows))
    }

    #[instrument(skip(self))]
    async fn search_deleted(&self, query: &str) -> Result<Vec<Claim>, PortError> {
        let rows = self.repository.search(query, SearchScope::Deleted).await?;
        Ok(into_claims(rows))
    }

    #[instrument(skip(self, claim), fields(claim_id = ?claim.id))]
    async fn save(&self, claim: Claim) -> Result<Claim, PortError> {
        let row = match claim.id {
            None => self.repository.insert(&claim).await?,
            Some(id) => self
                .repository
                .replace(id, &claim)
                .await?
                .ok_or_else(|| PortError::not_found("Claim", id))?,
        };

        debug!(id = row.id, "Claim row persisted");
        Ok(Claim::from(row))
    }
}
