//! Soft-delete lifecycle
//!
//! A claim is either active or deleted, and the state is fully determined by
//! its deletion timestamp. There is no terminal state: delete and restore can
//! be applied any number of times in any order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a claim on the soft-delete axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LifecycleState {
    /// Visible in active listings and searches
    Active,
    /// Retained but hidden from active listings
    Deleted {
        /// When the claim was last deleted
        at: NaiveDateTime,
    },
}

impl LifecycleState {
    /// Derives the state from a nullable deletion timestamp
    pub fn from_deleted_at(deleted_at: Option<NaiveDateTime>) -> Self {
        match deleted_at {
            Some(at) => LifecycleState::Deleted { at },
            None => LifecycleState::Active,
        }
    }

    /// Returns the deletion timestamp this state corresponds to
    pub fn deleted_at(&self) -> Option<NaiveDateTime> {
        match self {
            LifecycleState::Active => None,
            LifecycleState::Deleted { at } => Some(*at),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, LifecycleState::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_state_follows_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert!(LifecycleState::from_deleted_at(None).is_active());

        let deleted = LifecycleState::from_deleted_at(Some(at));
        assert_eq!(deleted, LifecycleState::Deleted { at });
        assert_eq!(deleted.deleted_at(), Some(at));
    }
}
