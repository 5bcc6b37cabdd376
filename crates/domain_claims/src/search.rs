//! Claim search matching
//!
//! A search hit is a claim whose claim number, policyholder name, or policy
//! number contains the query as a case-insensitive substring. Searches are
//! always restricted to one lifecycle state.

use serde::{Deserialize, Serialize};

use crate::claim::Claim;

/// Which lifecycle state a search or listing is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    Active,
    Deleted,
}

impl SearchScope {
    /// Maps the optional `includeDeleted` request flag to a scope
    ///
    /// Only an explicit `true` selects deleted claims.
    pub fn from_include_deleted(include_deleted: Option<bool>) -> Self {
        if include_deleted.unwrap_or(false) {
            SearchScope::Deleted
        } else {
            SearchScope::Active
        }
    }

    /// Returns true if the claim's lifecycle state belongs to this scope
    pub fn admits(&self, claim: &Claim) -> bool {
        match self {
            SearchScope::Active => claim.is_active(),
            SearchScope::Deleted => claim.is_deleted(),
        }
    }
}

/// Returns true if the query occurs in any of the three searchable fields
///
/// Matching is literal. An empty query matches every claim that has at
/// least one searchable field set.
pub fn matches_query(claim: &Claim, query: &str) -> bool {
    let needle = query.to_lowercase();
    [
        claim.claim_number.as_deref(),
        claim.policyholder_name.as_deref(),
        claim.policy_number.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(number: &str, holder: &str, policy: &str) -> Claim {
        Claim {
            claim_number: Some(number.to_string()),
            policyholder_name: Some(holder.to_string()),
            policy_number: Some(policy.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_each_searchable_field() {
        let c = claim("CLM-100", "Priya Sharma", "POL-77");

        assert!(matches_query(&c, "clm-1"));
        assert!(matches_query(&c, "SHARMA"));
        assert!(matches_query(&c, "pol-7"));
        assert!(!matches_query(&c, "Raj"));
    }

    #[test]
    fn test_description_is_not_searched() {
        let mut c = claim("CLM-1", "Jane Doe", "POL-1");
        c.description = Some("water damage".to_string());
        assert!(!matches_query(&c, "water"));
    }

    #[test]
    fn test_wildcards_are_literal() {
        let c = claim("CLM-1", "Jane Doe", "POL-1");
        assert!(!matches_query(&c, "%"));
        assert!(!matches_query(&c, "J_ne"));
    }

    #[test]
    fn test_missing_fields_never_match() {
        let c = Claim::default();
        assert!(!matches_query(&c, ""));
    }

    #[test]
    fn test_scope_from_flag() {
        assert_eq!(SearchScope::from_include_deleted(None), SearchScope::Active);
        assert_eq!(SearchScope::from_include_deleted(Some(false)), SearchScope::Active);
        assert_eq!(SearchScope::from_include_deleted(Some(true)), SearchScope::Deleted);
    }
}
