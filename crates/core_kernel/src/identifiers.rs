//! Strongly-typed identifiers for domain entities
//!
//! Claim records are keyed by a database-assigned sequence number. Wrapping it
//! in a newtype keeps the internal identity from being confused with the
//! caller-facing claim number, which is a free-form string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Internal identity of a claim record
///
/// Assigned by storage on first save and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(i64);

impl ClaimId {
    /// Wraps a raw sequence value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence value
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a valid claim identity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid claim id '{input}': {source}")]
pub struct ParseClaimIdError {
    input: String,
    #[source]
    source: ParseIntError,
}

impl FromStr for ClaimId {
    type Err = ParseClaimIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|source| ParseClaimIdError {
                input: s.to_string(),
                source,
            })
    }
}

impl From<i64> for ClaimId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ClaimId> for i64 {
    fn from(id: ClaimId) -> i64 {
        id.0
    }
}
