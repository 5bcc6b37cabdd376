//! Claim service
//!
//! Applies the soft-delete lifecycle on top of a [`ClaimStore`]. Reads are
//! passthroughs filtered by lifecycle state; delete and restore load the
//! record, flip its deletion timestamp, and save it back.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info, instrument};

use core_kernel::{ClaimId, HealthCheckResult};

use crate::claim::Claim;
use crate::error::ClaimError;
use crate::fraud::FraudAssessment;
use crate::ports::ClaimStore;
use crate::search::SearchScope;
use crate::stats::ClaimStatistics;

/// Service for managing claim records
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct ClaimService {
    store: Arc<dyn ClaimStore>,
}

impl ClaimService {
    /// Creates a new claim service over the given store
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Lists claims that have not been soft-deleted
    pub async fn get_all_active_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.find_active().await?)
    }

    /// Lists active claims flagged as fraudulent
    pub async fn get_all_fraudulent_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.find_active_fraudulent().await?)
    }

    /// Lists soft-deleted claims
    pub async fn get_all_deleted_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.find_deleted().await?)
    }

    /// Looks up a claim by identity
    ///
    /// Returns `None` when no record exists; soft-deleted records are returned.
    pub async fn get_claim_by_id(&self, id: ClaimId) -> Result<Option<Claim>, ClaimError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Looks up a claim by its exact claim number
    pub async fn get_claim_by_claim_number(
        &self,
        claim_number: &str,
    ) -> Result<Option<Claim>, ClaimError> {
        Ok(self.store.find_by_claim_number(claim_number).await?)
    }

    /// Creates or fully replaces a claim
    ///
    /// No field validation is performed.
    #[instrument(skip(self, claim), fields(claim_id = ?claim.id))]
    pub async fn save_claim(&self, claim: Claim) -> Result<Claim, ClaimError> {
        let saved = self.store.save(claim).await?;
        debug!(id = ?saved.id, "Claim saved");
        Ok(saved)
    }

    /// Replaces the claim stored under `id`
    ///
    /// The path identity always wins over any identity carried by `claim`.
    /// Returns `None` without writing when no record exists under `id`.
    #[instrument(skip(self, claim), fields(claim_id = %id))]
    pub async fn update_claim(&self, id: ClaimId, claim: Claim) -> Result<Option<Claim>, ClaimError> {
        if self.store.find_by_id(id).await?.is_none() {
            debug!("Update target does not exist");
            return Ok(None);
        }

        let saved = self.store.save(claim.with_id(id)).await?;
        Ok(Some(saved))
    }

    /// Soft-deletes a claim by stamping its deletion time with the current time
    ///
    /// Unknown ids are ignored. Deleting an already-deleted claim re-stamps it.
    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn delete_claim(&self, id: ClaimId) -> Result<(), ClaimError> {
        self.delete_claim_at(id, Utc::now().naive_utc()).await
    }

    /// Soft-deletes a claim with an explicit deletion timestamp
    pub async fn delete_claim_at(&self, id: ClaimId, at: NaiveDateTime) -> Result<(), ClaimError> {
        let Some(mut claim) = self.store.find_by_id(id).await? else {
            debug!(claim_id = %id, "Delete ignored, claim does not exist");
            return Ok(());
        };

        claim.mark_deleted(at);
        self.store.save(claim).await?;
        info!(claim_id = %id, deleted_at = %at, "Claim soft-deleted");
        Ok(())
    }

    /// Restores a soft-deleted claim
    ///
    /// Unknown ids are ignored; restoring an active claim leaves it active.
    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn restore_claim(&self, id: ClaimId) -> Result<(), ClaimError> {
        let Some(mut claim) = self.store.find_by_id(id).await? else {
            debug!("Restore ignored, claim does not exist");
            return Ok(());
        };

        claim.restore();
        self.store.save(claim).await?;
        info!("Claim restored");
        Ok(())
    }

    /// Searches active claims
    pub async fn search_active_claims(&self, query: &str) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.search_active(query).await?)
    }

    /// Searches soft-deleted claims
    pub async fn search_deleted_claims(&self, query: &str) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.search_deleted(query).await?)
    }

    /// Dispatches a search to the active or deleted claims
    #[instrument(skip(self))]
    pub async fn search_claims(&self, query: &str, scope: SearchScope) -> Result<Vec<Claim>, ClaimError> {
        match scope {
            SearchScope::Active => self.search_active_claims(query).await,
            SearchScope::Deleted => self.search_deleted_claims(query).await,
        }
    }

    /// Computes dashboard statistics over the active claims
    pub async fn claim_statistics(&self) -> Result<ClaimStatistics, ClaimError> {
        let active = self.store.find_active().await?;
        Ok(ClaimStatistics::from_claims(&active))
    }

    /// Screens a claim against the fraud rules without modifying it
    ///
    /// The claimant's history is taken from the active claims, in the year
    /// up to the claim's filing date (or now, when it has none). Returns
    /// `None` for unknown ids.
    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn assess_fraud(&self, id: ClaimId) -> Result<Option<FraudAssessment>, ClaimError> {
        let Some(claim) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        let history = self.store.find_active().await?;
        let as_of = claim.claim_date.unwrap_or_else(|| Utc::now().naive_utc());
        let assessment = FraudAssessment::assess(&claim, &history, as_of);
        debug!(rules = ?assessment.flagged_rules, "Fraud screening complete");
        Ok(Some(assessment))
    }

    /// Reports the health of the underlying store
    pub async fn health_check(&self) -> HealthCheckResult {
        self.store.health_check().await
    }
}
