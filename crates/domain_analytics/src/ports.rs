//! Analytics domain ports
//!
//! The [`ClaimSource`] trait defines everything the analytics domain needs
//! from its claim row store, enabling swappable implementations:
//!
//! - **Database adapter**: reads the `claims` table via SQLx (infra_db)
//! - **In-memory adapter**: for tests without external dependencies
//!
//! The engine relies on the source to apply the uniform [`ClaimFilter`]
//! natively (tenant exact match, inclusive date window) and to enforce the
//! per-report restrictions: pending-only for aging, approved-only for
//! settlement, and the trend cutoff.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::claim::{ClaimRecord, ClaimStatus};
use crate::filter::ClaimFilter;

/// A claim source fetch failure
///
/// Wraps whatever the underlying store reported. The engine performs no
/// retry and no partial-result fallback; a source error aborts the whole
/// report and is propagated unchanged to the caller.
#[derive(Debug, Error)]
#[error("Claim source error: {0}")]
pub struct SourceError(#[from] pub Box<dyn std::error::Error + Send + Sync>);

impl SourceError {
    /// Wraps a store error
    pub fn from_store(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }
}

/// Supplies claim snapshots to the aggregation engine
///
/// Implementations must return each claim at most once per fetch and apply
/// the filter's tenant and date predicates; no ordering is required.
#[async_trait]
pub trait ClaimSource: Send + Sync {
    /// Fetches every claim matching the filter
    async fn fetch_claims(&self, filter: &ClaimFilter) -> Result<Vec<ClaimRecord>, SourceError>;

    /// Fetches claims matching the filter with the given status
    async fn fetch_with_status(
        &self,
        filter: &ClaimFilter,
        status: &ClaimStatus,
    ) -> Result<Vec<ClaimRecord>, SourceError>;

    /// Fetches claims matching the filter created at or after `cutoff`
    async fn fetch_created_since(
        &self,
        filter: &ClaimFilter,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ClaimRecord>, SourceError>;
}
