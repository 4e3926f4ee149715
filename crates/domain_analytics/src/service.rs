//! Analytics service
//!
//! Pairs one source fetch with one pure engine computation per report call.
//! The service is stateless and holds no cache: every call recomputes from a
//! fresh snapshot, so repeated calls are idempotent and consistent with the
//! store as of the fetch instant.

use chrono::{DateTime, Months, Utc};
use tracing::debug;

use crate::claim::ClaimStatus;
use crate::engine;
use crate::filter::ClaimFilter;
use crate::ports::{ClaimSource, SourceError};
use crate::report::{
    AgingBucket, CategoryTotal, ClaimsOverview, DepartmentBreakdown, SettlementSummary,
    StatusBreakdown, TrendPoint, TypeBreakdown,
};

/// Default trend window in calendar months
pub const DEFAULT_TREND_MONTHS: u32 = 12;

/// Default number of categories returned by the top-categories report
pub const DEFAULT_CATEGORY_LIMIT: usize = 10;

/// Report facade over a [`ClaimSource`]
///
/// "Now" is injected into every call that needs it so tests can supply fixed
/// timestamps; the request layer passes `Utc::now()`.
#[derive(Debug, Clone)]
pub struct AnalyticsService<S> {
    source: S,
}

impl<S: ClaimSource> AnalyticsService<S> {
    /// Creates a service over the given claim source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Headline totals for the filtered claim set
    pub async fn overview(&self, filter: &ClaimFilter) -> Result<ClaimsOverview, SourceError> {
        let claims = self.source.fetch_claims(filter).await?;
        debug!(claims = claims.len(), "Computing claims overview");
        Ok(engine::overview(&claims))
    }

    /// Claim counts grouped by raw status label
    pub async fn status_breakdown(
        &self,
        filter: &ClaimFilter,
    ) -> Result<StatusBreakdown, SourceError> {
        let claims = self.source.fetch_claims(filter).await?;
        Ok(engine::status_breakdown(&claims))
    }

    /// Count and amount per distinct claim type
    pub async fn type_breakdown(&self, filter: &ClaimFilter) -> Result<TypeBreakdown, SourceError> {
        let claims = self.source.fetch_claims(filter).await?;
        Ok(engine::type_breakdown(&claims))
    }

    /// Monthly submission trend over the last `months` calendar months
    ///
    /// The cutoff is `now - months` in calendar months (not days) and the
    /// window restriction happens in the fetch, upstream of the bucketing.
    pub async fn monthly_trend(
        &self,
        filter: &ClaimFilter,
        months: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<TrendPoint>, SourceError> {
        let cutoff = now
            .checked_sub_months(Months::new(months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let claims = self.source.fetch_created_since(filter, cutoff).await?;
        debug!(claims = claims.len(), %cutoff, "Computing monthly trend");
        Ok(engine::monthly_trend(&claims))
    }

    /// Top `limit` categories by summed claimed amount
    pub async fn top_categories(
        &self,
        filter: &ClaimFilter,
        limit: usize,
    ) -> Result<Vec<CategoryTotal>, SourceError> {
        let claims = self.source.fetch_claims(filter).await?;
        Ok(engine::top_categories(&claims, limit))
    }

    /// Count, amount, and settled counts per department
    pub async fn department_breakdown(
        &self,
        filter: &ClaimFilter,
    ) -> Result<DepartmentBreakdown, SourceError> {
        let claims = self.source.fetch_claims(filter).await?;
        Ok(engine::department_breakdown(&claims))
    }

    /// Age-bucketed view of unresolved claims
    ///
    /// Restricted to pending claims at the fetch, not as a post-filter.
    pub async fn aging_report(
        &self,
        filter: &ClaimFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<AgingBucket>, SourceError> {
        let claims = self
            .source
            .fetch_with_status(filter, &ClaimStatus::Pending)
            .await?;
        debug!(claims = claims.len(), "Computing aging report");
        Ok(engine::aging_report(&claims, now))
    }

    /// Aggregate settlement figures over approved claims
    pub async fn settlement_ratio(
        &self,
        filter: &ClaimFilter,
    ) -> Result<SettlementSummary, SourceError> {
        let claims = self
            .source
            .fetch_with_status(filter, &ClaimStatus::Approved)
            .await?;
        Ok(engine::settlement_ratio(&claims))
    }
}
