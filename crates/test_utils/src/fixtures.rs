//! Pre-built Test Fixtures
//!
//! Ready-to-use claims for unit and API tests. The sample set mirrors the
//! seed data shown on the claims dashboard.

use chrono::{NaiveDate, NaiveDateTime};
use domain_claims::Claim;
use rust_decimal_macros::dec;

use crate::builders::ClaimBuilder;

/// Fixture for timestamps used in claim records
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A fixed incident time
    pub fn incident_date() -> NaiveDateTime {
        Self::at(2024, 3, 1, 14, 0)
    }

    /// A fixed filing time, two weeks after the incident
    pub fn claim_date() -> NaiveDateTime {
        Self::at(2024, 3, 15, 10, 30)
    }

    /// A fixed deletion time
    pub fn deleted_at() -> NaiveDateTime {
        Self::at(2024, 4, 2, 8, 0)
    }

    /// Builds a timestamp from calendar parts
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid fixture timestamp")
    }
}

/// Fixture for claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// The claim used by the create/delete/restore scenario
    pub fn jane_doe() -> Claim {
        ClaimBuilder::new()
            .with_claim_number("CLM-1")
            .with_policyholder("Jane Doe")
            .with_amount(dec!(500.0))
            .build()
    }

    /// High-amount claim flagged as fraudulent
    pub fn raj_kumar() -> Claim {
        ClaimBuilder::new()
            .with_claim_number("C1")
            .with_policyholder("Raj Kumar")
            .with_policy_number("POL-1001")
            .with_amount(dec!(125000))
            .fraudulent("High claim amount and frequency")
            .build()
    }

    /// Legitimate claim
    pub fn priya_sharma() -> Claim {
        ClaimBuilder::new()
            .with_claim_number("C2")
            .with_policyholder("Priya Sharma")
            .with_policy_number("POL-1002")
            .with_amount(dec!(45000))
            .legitimate()
            .build()
    }

    /// High-amount claim flagged as fraudulent
    pub fn amit_patel() -> Claim {
        ClaimBuilder::new()
            .with_claim_number("C3")
            .with_policyholder("Amit Patel")
            .with_policy_number("POL-1003")
            .with_amount(dec!(150000))
            .fraudulent("High claim amount")
            .build()
    }

    /// Frequent-claimant record flagged as fraudulent
    pub fn sneha_gupta() -> Claim {
        ClaimBuilder::new()
            .with_claim_number("C4")
            .with_policyholder("Sneha Gupta")
            .with_policy_number("POL-1004")
            .with_amount(dec!(75000))
            .fraudulent("Frequent claims")
            .build()
    }

    /// The four dashboard sample claims, all active
    pub fn dashboard_claims() -> Vec<Claim> {
        vec![
            Self::raj_kumar(),
            Self::priya_sharma(),
            Self::amit_patel(),
            Self::sneha_gupta(),
        ]
    }
}
