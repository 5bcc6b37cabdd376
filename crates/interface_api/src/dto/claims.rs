//! Claims DTOs
//!
//! Bodies use camelCase field names and carry amounts as JSON numbers.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_claims::{Claim, ClaimStatistics, FraudAssessment, FraudRule};

/// Body of create and update requests
///
/// Every field is optional. A body `id` is accepted but never used: create
/// assigns a fresh identity and update uses the path identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub id: Option<i64>,
    pub claim_id: Option<String>,
    pub policyholder_name: Option<String>,
    pub policy_number: Option<String>,
    pub claim_type: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub incident_date: Option<NaiveDateTime>,
    pub claim_date: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub is_fraudulent: Option<bool>,
    pub fraud_reason: Option<String>,
    pub deleted_at: Option<NaiveDateTime>,
}

impl ClaimRequest {
    /// Converts the body into an unsaved claim
    pub fn into_claim(self) -> Claim {
        Claim {
            id: None,
            claim_number: self.claim_id,
            policyholder_name: self.policyholder_name,
            policy_number: self.policy_number,
            claim_type: self.claim_type,
            amount: self.amount,
            description: self.description,
            incident_date: self.incident_date,
            claim_date: self.claim_date,
            status: self.status,
            is_fraudulent: self.is_fraudulent,
            fraud_reason: self.fraud_reason,
            deleted_at: self.deleted_at,
        }
    }
}

/// A stored claim as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: Option<i64>,
    pub claim_id: Option<String>,
    pub policyholder_name: Option<String>,
    pub policy_number: Option<String>,
    pub claim_type: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub incident_date: Option<NaiveDateTime>,
    pub claim_date: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub is_fraudulent: Option<bool>,
    pub fraud_reason: Option<String>,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.map(i64::from),
            claim_id: claim.claim_number,
            policyholder_name: claim.policyholder_name,
            policy_number: claim.policy_number,
            claim_type: claim.claim_type,
            amount: claim.amount,
            description: claim.description,
            incident_date: claim.incident_date,
            claim_date: claim.claim_date,
            status: claim.status,
            is_fraudulent: claim.is_fraudulent,
            fraud_reason: claim.fraud_reason,
            deleted_at: claim.deleted_at,
        }
    }
}

/// Query string of the search endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: String,
    #[serde(default)]
    pub include_deleted: Option<bool>,
}

/// Dashboard statistics over active claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_claims: u64,
    pub fraudulent_claims: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fraudulent_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fraud_percentage: Decimal,
}

impl From<ClaimStatistics> for StatsResponse {
    fn from(stats: ClaimStatistics) -> Self {
        Self {
            total_claims: stats.total_claims,
            fraudulent_claims: stats.fraudulent_claims,
            total_amount: stats.total_amount,
            fraudulent_amount: stats.fraudulent_amount,
            fraud_percentage: stats.fraud_percentage,
        }
    }
}

/// Advisory fraud screening of one claim
///
/// `flaggedRules` carries the rule messages; `rules` the rule codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudAssessmentResponse {
    pub id: Option<i64>,
    pub claims_in_past_year: usize,
    pub suspicious: bool,
    pub rules: Vec<FraudRule>,
    pub flagged_rules: Vec<String>,
    pub as_of: NaiveDateTime,
}

impl From<FraudAssessment> for FraudAssessmentResponse {
    fn from(assessment: FraudAssessment) -> Self {
        Self {
            id: assessment.claim_id.map(i64::from),
            claims_in_past_year: assessment.claims_in_past_year,
            suspicious: assessment.is_suspicious(),
            flagged_rules: assessment.messages().into_iter().map(String::from).collect(),
            rules: assessment.flagged_rules,
            as_of: assessment.as_of,
        }
    }
}

pub fn claim_list(claims: Vec<Claim>) -> Vec<ClaimResponse> {
    claims.into_iter().map(ClaimResponse::from).collect()
}
