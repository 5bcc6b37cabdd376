//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the claims registry
//! using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: `ClaimsRepository` owns the SQL
//! and row mapping, and `PostgresClaimStore` adapts it to the domain's
//! `ClaimStore` port, translating `DatabaseError` into `PortError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations, PostgresClaimStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/claims")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresClaimStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod migrations;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use migrations::run_migrations;
pub use repositories::ClaimsRepository;
pub use adapters::PostgresClaimStore;
