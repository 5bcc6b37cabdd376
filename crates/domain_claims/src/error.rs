//! Claims domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the claims domain
///
/// Absence of a record is not an error here: lookups return `Option` and
/// delete/restore on an unknown id succeed without doing anything.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim storage failure: {0}")]
    Storage(#[from] PortError),
}

impl ClaimError {
    /// Returns true if the underlying storage reported a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        match self {
            ClaimError::Storage(err) => err.is_conflict(),
        }
    }

    /// Returns true if the store could not be reached
    pub fn is_transient(&self) -> bool {
        match self {
            ClaimError::Storage(err) => err.is_transient(),
        }
    }
}
