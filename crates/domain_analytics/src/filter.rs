//! Uniform report filter
//!
//! Every report accepts the same optional filter: an exact-match tenant code
//! and an inclusive submission-date window. The filter is applied by the
//! source collaborator's native range query; [`ClaimFilter::matches`] exists
//! so in-memory sources can mirror those semantics exactly.

use chrono::{DateTime, Utc};

use core_kernel::TenantCode;

use crate::claim::ClaimRecord;

/// Query parameters applied before every report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimFilter {
    /// Retain only claims with this exact tenant code
    pub tenant_code: Option<TenantCode>,
    /// Retain only claims created at or after this instant
    pub start_date: Option<DateTime<Utc>>,
    /// Retain only claims created at or before this instant
    pub end_date: Option<DateTime<Utc>>,
}

impl ClaimFilter {
    /// Creates an empty filter that retains every claim
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter for a single tenant
    pub fn for_tenant(tenant_code: TenantCode) -> Self {
        Self {
            tenant_code: Some(tenant_code),
            ..Default::default()
        }
    }

    /// Restricts the filter to an inclusive submission-date window
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Returns true if the claim passes every supplied predicate
    ///
    /// The date window is inclusive at both ends, matching the row store's
    /// `BETWEEN` semantics.
    pub fn matches(&self, claim: &ClaimRecord) -> bool {
        if let Some(tenant) = &self.tenant_code {
            if &claim.tenant_code != tenant {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if claim.created_at < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if claim.created_at > end {
                return false;
            }
        }
        true
    }
}
