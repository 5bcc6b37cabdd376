//! Rule-based fraud screening
//!
//! Screening is advisory. It reports which rules a claim trips but never
//! touches the stored fraud flag, which stays whatever the caller saved.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;

use crate::claim::Claim;

/// Amounts strictly above this trip [`FraudRule::HighAmount`]
pub const HIGH_AMOUNT_THRESHOLD: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// More claims than this within the lookback window trip [`FraudRule::FrequentClaims`]
pub const FREQUENT_CLAIMS_THRESHOLD: usize = 3;

/// Length of the frequent-claims lookback window
pub const LOOKBACK_DAYS: i64 = 365;

/// A fraud screening rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FraudRule {
    /// Claimed amount above [`HIGH_AMOUNT_THRESHOLD`]
    HighAmount,
    /// More than [`FREQUENT_CLAIMS_THRESHOLD`] claims in the past year
    FrequentClaims,
}

impl FraudRule {
    /// Every rule, in reporting order
    pub const ALL: [FraudRule; 2] = [FraudRule::HighAmount, FraudRule::FrequentClaims];

    /// Human-readable explanation shown when the rule trips
    pub fn message(&self) -> &'static str {
        match self {
            FraudRule::HighAmount => "Claim amount exceeds ₹100,000",
            FraudRule::FrequentClaims => "More than 3 claims in the past year",
        }
    }

    fn trips(&self, amount: Option<Decimal>, claims_in_past_year: usize) -> bool {
        match self {
            FraudRule::HighAmount => amount.is_some_and(|a| a > HIGH_AMOUNT_THRESHOLD),
            FraudRule::FrequentClaims => claims_in_past_year > FREQUENT_CLAIMS_THRESHOLD,
        }
    }
}

/// Returns the rules tripped by the given amount and past-year claim count
///
/// A missing amount never trips the amount rule.
pub fn evaluate(amount: Option<Decimal>, claims_in_past_year: usize) -> Vec<FraudRule> {
    FraudRule::ALL
        .into_iter()
        .filter(|rule| rule.trips(amount, claims_in_past_year))
        .collect()
}

/// Outcome of screening one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAssessment {
    pub claim_id: Option<ClaimId>,
    /// Claims by the same claimant filed in the year up to `as_of`, this one included
    pub claims_in_past_year: usize,
    pub flagged_rules: Vec<FraudRule>,
    /// End of the lookback window
    pub as_of: NaiveDateTime,
}

impl FraudAssessment {
    /// Screens `claim` against the other records in `history`
    ///
    /// A history record counts toward the claimant's past-year total when it
    /// shares the policyholder name (ignoring case) or the policy number and
    /// its filing date lies within [`LOOKBACK_DAYS`] before `as_of`. The
    /// screened claim itself always counts once.
    pub fn assess<'a>(
        claim: &Claim,
        history: impl IntoIterator<Item = &'a Claim>,
        as_of: NaiveDateTime,
    ) -> Self {
        let window_start = as_of - Duration::days(LOOKBACK_DAYS);

        let related = history
            .into_iter()
            .filter(|other| claim.id.is_none() || other.id != claim.id)
            .filter(|other| same_claimant(claim, other))
            .filter(|other| {
                other
                    .claim_date
                    .is_some_and(|filed| filed >= window_start && filed <= as_of)
            })
            .count();

        let claims_in_past_year = related + 1;

        Self {
            claim_id: claim.id,
            claims_in_past_year,
            flagged_rules: evaluate(claim.amount, claims_in_past_year),
            as_of,
        }
    }

    /// Returns true if any rule tripped
    pub fn is_suspicious(&self) -> bool {
        !self.flagged_rules.is_empty()
    }

    /// Messages of the tripped rules, in reporting order
    pub fn messages(&self) -> Vec<&'static str> {
        self.flagged_rules.iter().map(FraudRule::message).collect()
    }
}

fn same_claimant(a: &Claim, b: &Claim) -> bool {
    let same_name = match (&a.policyholder_name, &b.policyholder_name) {
        (Some(x), Some(y)) => x.trim().to_lowercase() == y.trim().to_lowercase(),
        _ => false,
    };
    let same_policy = match (&a.policy_number, &b.policy_number) {
        (Some(x), Some(y)) => x.trim() == y.trim(),
        _ => false,
    };
    same_name || same_policy
}
