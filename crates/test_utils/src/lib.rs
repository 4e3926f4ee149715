//! Test Utilities
//!
//! Shared helpers for the analytics test suite:
//! - [`builders`]: builder patterns for claim records with sensible defaults
//! - [`fixtures`]: deterministic timestamps, tenants, and labels
//! - [`generators`]: proptest strategies that maintain domain invariants
//! - [`sources`]: in-memory and failing [`domain_analytics::ClaimSource`]
//!   adapters for tests without a database

pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod sources;

pub use builders::ClaimRecordBuilder;
pub use fixtures::{TenantFixtures, TemporalFixtures};
pub use sources::{FailingClaimSource, InMemoryClaimSource};
