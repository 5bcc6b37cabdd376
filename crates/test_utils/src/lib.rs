//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims matching the dashboard sample data
//! - `builders`: Builder for claim records with sensible defaults
//! - `harness`: In-memory store and service wiring
//! - `database`: PostgreSQL test container management
//! - `assertions`: Lifecycle and search assertions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod harness;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use harness::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
