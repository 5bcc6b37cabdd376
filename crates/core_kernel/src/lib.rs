//! Core Kernel - Foundational types shared by the claims registry crates
//!
//! This crate provides the building blocks used across the workspace:
//! - Strongly-typed record identifiers
//! - The adapter-neutral `PortError` and the port marker traits
//! - Health check types reported by storage adapters

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::{ClaimId, ParseClaimIdError};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use error::CoreError;
