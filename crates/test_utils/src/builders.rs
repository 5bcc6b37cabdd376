//! Test Data Builders
//!
//! Provides a builder for claim records with sensible defaults, so tests
//! only spell out the fields they care about.

use chrono::NaiveDateTime;
use core_kernel::ClaimId;
use domain_claims::Claim;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test claims
#[derive(Debug, Clone)]
pub struct ClaimBuilder {
    claim: Claim,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a new builder with a pending, unflagged claim
    pub fn new() -> Self {
        Self {
            claim: Claim {
                id: None,
                claim_number: Some("CLM-TEST".to_string()),
                policyholder_name: Some("Test Policyholder".to_string()),
                policy_number: Some("POL-TEST".to_string()),
                claim_type: Some("ACCIDENT".to_string()),
                amount: Some(dec!(1000.00)),
                description: Some("Test claim".to_string()),
                incident_date: Some(TemporalFixtures::incident_date()),
                claim_date: Some(TemporalFixtures::claim_date()),
                status: Some("PENDING".to_string()),
                is_fraudulent: Some(false),
                fraud_reason: None,
                deleted_at: None,
            },
        }
    }

    /// Sets the identity
    pub fn with_id(mut self, id: i64) -> Self {
        self.claim.id = Some(ClaimId::new(id));
        self
    }

    /// Sets the claim number
    pub fn with_claim_number(mut self, number: impl Into<String>) -> Self {
        self.claim.claim_number = Some(number.into());
        self
    }

    /// Sets the policyholder name
    pub fn with_policyholder(mut self, name: impl Into<String>) -> Self {
        self.claim.policyholder_name = Some(name.into());
        self
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.claim.policy_number = Some(number.into());
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.claim.amount = Some(amount);
        self
    }

    /// Sets the status label
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.claim.status = Some(status.into());
        self
    }

    /// Flags the claim as fraudulent with a reason
    pub fn fraudulent(mut self, reason: impl Into<String>) -> Self {
        self.claim.is_fraudulent = Some(true);
        self.claim.fraud_reason = Some(reason.into());
        self
    }

    /// Clears the fraud flag and reason
    pub fn legitimate(mut self) -> Self {
        self.claim.is_fraudulent = Some(false);
        self.claim.fraud_reason = None;
        self
    }

    /// Marks the claim as soft-deleted at the given time
    pub fn deleted_at(mut self, at: NaiveDateTime) -> Self {
        self.claim.deleted_at = Some(at);
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        self.claim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_are_active() {
        let claim = ClaimBuilder::new().build();
        assert!(claim.is_active());
        assert!(claim.id.is_none());
        assert_eq!(claim.is_fraudulent, Some(false));
    }

    #[test]
    fn test_builder_fraudulent() {
        let claim = ClaimBuilder::new().fraudulent("High amount").build();
        assert!(claim.is_flagged_fraudulent());
        assert_eq!(claim.fraud_reason.as_deref(), Some("High amount"));
    }
}
