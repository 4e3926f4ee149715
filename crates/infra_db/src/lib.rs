//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the analytics core,
//! implementing the [`domain_analytics::ClaimSource`] port on PostgreSQL
//! using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: [`ClaimStore`] hides the row
//! store's SQL details behind the domain's port trait, applying the uniform
//! report filter (tenant exact match, inclusive date window) and the
//! per-report restrictions natively in the query.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, ClaimStore, DatabaseConfig};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/benefits")).await?;
//! let store = ClaimStore::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::claims::ClaimStore;
