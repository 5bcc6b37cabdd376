//! Claims Registry Domain
//!
//! This crate holds the claim record and the rules layered on top of raw
//! storage: soft deletion, restore, lifecycle-filtered reads, and search.
//!
//! # Claim Lifecycle
//!
//! ```text
//!            delete
//!   ACTIVE ─────────▶ DELETED
//!          ◀─────────
//!            restore
//! ```
//!
//! A record is never physically removed. Deletion stamps `deleted_at` and
//! restore clears it; both transitions are always available.
//!
//! Fraud screening ([`fraud`]) is advisory and never changes the stored
//! fraud flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_claims::{ClaimService, InMemoryClaimStore};
//!
//! let service = ClaimService::new(Arc::new(InMemoryClaimStore::new()));
//! let saved = service.save_claim(claim).await?;
//! service.delete_claim(saved.id.unwrap()).await?;
//! ```

pub mod claim;
pub mod lifecycle;
pub mod search;
pub mod stats;
pub mod fraud;
pub mod ports;
pub mod service;
pub mod error;

pub use claim::Claim;
pub use lifecycle::LifecycleState;
pub use search::SearchScope;
pub use stats::ClaimStatistics;
pub use fraud::{FraudAssessment, FraudRule};
pub use ports::ClaimStore;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::InMemoryClaimStore;
pub use service::ClaimService;
pub use error::ClaimError;
