//! Dashboard statistics over active claims

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::claim::Claim;

/// Aggregate figures for the claims dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClaimStatistics {
    pub total_claims: u64,
    pub fraudulent_claims: u64,
    pub total_amount: Decimal,
    pub fraudulent_amount: Decimal,
    /// Share of fraudulent claims by count, rounded to two decimal places
    pub fraud_percentage: Decimal,
}

impl ClaimStatistics {
    /// Computes statistics over the given claims
    ///
    /// Callers pass active claims only. Missing amounts count as zero.
    pub fn from_claims<'a>(claims: impl IntoIterator<Item = &'a Claim>) -> Self {
        let mut stats = Self::default();

        for claim in claims {
            let amount = claim.amount.unwrap_or_default();
            stats.total_claims += 1;
            stats.total_amount += amount;
            if claim.is_flagged_fraudulent() {
                stats.fraudulent_claims += 1;
                stats.fraudulent_amount += amount;
            }
        }

        if stats.total_claims > 0 {
            let ratio = Decimal::from(stats.fraudulent_claims) * Decimal::ONE_HUNDRED
                / Decimal::from(stats.total_claims);
            stats.fraud_percentage =
                ratio.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        }

        stats
    }
}
