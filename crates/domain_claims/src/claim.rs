//! Claim record

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;
use crate::lifecycle::LifecycleState;

/// An insurance claim record
///
/// Every attribute except the identity is caller-supplied and unvalidated;
/// a save replaces the stored record field by field, so a `None` here
/// clears the stored value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Claim {
    /// Storage-assigned identity, `None` until first saved
    pub id: Option<ClaimId>,
    /// Caller-facing claim number, unique across all records
    pub claim_number: Option<String>,
    /// Name of the policyholder
    pub policyholder_name: Option<String>,
    /// Policy the claim is made against
    pub policy_number: Option<String>,
    /// Free-text claim category
    pub claim_type: Option<String>,
    /// Claimed amount
    pub amount: Option<Decimal>,
    /// Description
    pub description: Option<String>,
    /// When the incident happened
    pub incident_date: Option<NaiveDateTime>,
    /// When the claim was filed
    pub claim_date: Option<NaiveDateTime>,
    /// Free-text status label
    pub status: Option<String>,
    /// Fraud flag, independent of status and lifecycle
    pub is_fraudulent: Option<bool>,
    /// Why the claim was flagged
    pub fraud_reason: Option<String>,
    /// Soft-deletion timestamp; `None` means active
    pub deleted_at: Option<NaiveDateTime>,
}

impl Claim {
    /// Returns the lifecycle state derived from the deletion timestamp
    pub fn lifecycle(&self) -> LifecycleState {
        LifecycleState::from_deleted_at(self.deleted_at)
    }

    /// Returns true if the claim has not been soft-deleted
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Returns true if the claim has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns true only when the fraud flag is explicitly set
    pub fn is_flagged_fraudulent(&self) -> bool {
        self.is_fraudulent == Some(true)
    }

    /// Soft-deletes the claim at the given instant
    ///
    /// An already-deleted claim is re-stamped with the new instant.
    pub fn mark_deleted(&mut self, at: NaiveDateTime) {
        self.deleted_at = Some(at);
    }

    /// Clears the deletion timestamp
    pub fn restore(&mut self) {
        self.deleted_at = None;
    }

    /// Returns a copy carrying the given identity
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_claim_is_active() {
        let claim = Claim::default();
        assert!(claim.is_active());
        assert_eq!(claim.lifecycle(), LifecycleState::Active);
    }

    #[test]
    fn test_mark_deleted_restamps() {
        let mut claim = Claim::default();
        claim.mark_deleted(timestamp(1));
        claim.mark_deleted(timestamp(2));

        assert!(claim.is_deleted());
        assert_eq!(claim.deleted_at, Some(timestamp(2)));
    }

    #[test]
    fn test_restore_clears_deletion() {
        let mut claim = Claim::default();
        claim.mark_deleted(timestamp(1));
        claim.restore();

        assert!(claim.is_active());
        claim.restore();
        assert!(claim.is_active());
    }

    #[test]
    fn test_fraud_flag_is_tri_state() {
        let mut claim = Claim::default();
        assert!(!claim.is_flagged_fraudulent());

        claim.is_fraudulent = Some(false);
        assert!(!claim.is_flagged_fraudulent());

        claim.is_fraudulent = Some(true);
        claim.mark_deleted(timestamp(4));
        assert!(claim.is_flagged_fraudulent());
    }
}
