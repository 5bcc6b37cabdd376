//! Domain Adapters
//!
//! Adapter implementations for domain ports, connecting domain interfaces
//! to the PostgreSQL database layer.

pub mod claims;

pub use claims::PostgresClaimStore;
