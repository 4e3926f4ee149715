//! Test claim source adapters
//!
//! [`InMemoryClaimSource`] is the "mock adapter" implementation of the
//! [`ClaimSource`] port: a vector of claims filtered with the same inclusive
//! semantics the database adapter applies natively. [`FailingClaimSource`]
//! always errors, for exercising the fail-fast propagation contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use domain_analytics::{ClaimFilter, ClaimRecord, ClaimSource, ClaimStatus, SourceError};

/// In-memory claim source backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryClaimSource {
    claims: Vec<ClaimRecord>,
}

impl InMemoryClaimSource {
    /// Creates a source over the given claims
    pub fn new(claims: Vec<ClaimRecord>) -> Self {
        Self { claims }
    }
}

#[async_trait]
impl ClaimSource for InMemoryClaimSource {
    async fn fetch_claims(&self, filter: &ClaimFilter) -> Result<Vec<ClaimRecord>, SourceError> {
        Ok(self
            .claims
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn fetch_with_status(
        &self,
        filter: &ClaimFilter,
        status: &ClaimStatus,
    ) -> Result<Vec<ClaimRecord>, SourceError> {
        Ok(self
            .claims
            .iter()
            .filter(|c| filter.matches(c) && &c.status == status)
            .cloned()
            .collect())
    }

    async fn fetch_created_since(
        &self,
        filter: &ClaimFilter,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ClaimRecord>, SourceError> {
        Ok(self
            .claims
            .iter()
            .filter(|c| filter.matches(c) && c.created_at >= cutoff)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct StubFailure(String);

/// Claim source that fails every fetch
#[derive(Debug, Clone)]
pub struct FailingClaimSource {
    message: String,
}

impl FailingClaimSource {
    /// Creates a source that fails with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn fail(&self) -> SourceError {
        SourceError::from_store(StubFailure(self.message.clone()))
    }
}

#[async_trait]
impl ClaimSource for FailingClaimSource {
    async fn fetch_claims(&self, _filter: &ClaimFilter) -> Result<Vec<ClaimRecord>, SourceError> {
        Err(self.fail())
    }

    async fn fetch_with_status(
        &self,
        _filter: &ClaimFilter,
        _status: &ClaimStatus,
    ) -> Result<Vec<ClaimRecord>, SourceError> {
        Err(self.fail())
    }

    async fn fetch_created_since(
        &self,
        _filter: &ClaimFilter,
        _cutoff: DateTime<Utc>,
    ) -> Result<Vec<ClaimRecord>, SourceError> {
        Err(self.fail())
    }
}
