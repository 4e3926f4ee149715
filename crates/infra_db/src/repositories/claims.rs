//! Claim store adapter
//!
//! Implements the analytics domain's [`ClaimSource`] port on the `claims`
//! table. The uniform report filter and the per-report restrictions (status,
//! trend cutoff) are applied natively in the query so the engine receives an
//! already-restricted snapshot, never a superset it must re-filter.
//!
//! Queries are assembled with `QueryBuilder` because every predicate is
//! optional; the column list stays fixed so rows always decode into
//! [`ClaimRow`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use core_kernel::{ClaimId, TenantCode};
use domain_analytics::{ClaimFilter, ClaimRecord, ClaimSource, ClaimStatus, SourceError};

use crate::error::DatabaseError;

const SELECT_CLAIMS: &str = "SELECT claim_id, tenant_code, amount, approved_amount, status, \
     claim_type, category, department, created_at, processed_at \
     FROM claims WHERE 1=1";

/// Repository supplying claim snapshots for analytics
///
/// Read-only: the analytics engine is a pure transform and this store never
/// mutates claim rows.
#[derive(Debug, Clone)]
pub struct ClaimStore {
    pool: PgPool,
}

impl ClaimStore {
    /// Creates a new ClaimStore with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select_with_filter<'a>(&self, filter: &'a ClaimFilter) -> QueryBuilder<'a, Postgres> {
        let mut query = QueryBuilder::new(SELECT_CLAIMS);
        if let Some(tenant) = &filter.tenant_code {
            query.push(" AND tenant_code = ");
            query.push_bind(tenant.as_str());
        }
        if let Some(start) = filter.start_date {
            query.push(" AND created_at >= ");
            query.push_bind(start);
        }
        if let Some(end) = filter.end_date {
            query.push(" AND created_at <= ");
            query.push_bind(end);
        }
        query
    }

    async fn fetch(
        &self,
        mut query: QueryBuilder<'_, Postgres>,
    ) -> Result<Vec<ClaimRecord>, DatabaseError> {
        let rows: Vec<ClaimRow> = query.build_query_as().fetch_all(&self.pool).await?;
        rows.into_iter().map(ClaimRow::into_record).collect()
    }
}

#[async_trait]
impl ClaimSource for ClaimStore {
    async fn fetch_claims(&self, filter: &ClaimFilter) -> Result<Vec<ClaimRecord>, SourceError> {
        let query = self.select_with_filter(filter);
        self.fetch(query).await.map_err(SourceError::from_store)
    }

    async fn fetch_with_status(
        &self,
        filter: &ClaimFilter,
        status: &ClaimStatus,
    ) -> Result<Vec<ClaimRecord>, SourceError> {
        let mut query = self.select_with_filter(filter);
        query.push(" AND status = ");
        query.push_bind(status.as_str().to_string());
        self.fetch(query).await.map_err(SourceError::from_store)
    }

    async fn fetch_created_since(
        &self,
        filter: &ClaimFilter,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ClaimRecord>, SourceError> {
        let mut query = self.select_with_filter(filter);
        query.push(" AND created_at >= ");
        query.push_bind(cutoff);
        self.fetch(query).await.map_err(SourceError::from_store)
    }
}

/// Database row for a claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub claim_id: Uuid,
    pub tenant_code: String,
    pub amount: Option<Decimal>,
    pub approved_amount: Option<Decimal>,
    pub status: String,
    pub claim_type: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl ClaimRow {
    /// Converts the row into a domain claim record
    ///
    /// Fails only when the row violates the store's own constraints
    /// (e.g. an empty tenant code).
    pub fn into_record(self) -> Result<ClaimRecord, DatabaseError> {
        let tenant_code = TenantCode::new(self.tenant_code)
            .map_err(|e| DatabaseError::row_conversion("claim", e))?;

        Ok(ClaimRecord {
            id: ClaimId::from_uuid(self.claim_id),
            tenant_code,
            amount: self.amount,
            approved_amount: self.approved_amount,
            status: ClaimStatus::parse(&self.status),
            claim_type: self.claim_type,
            category: self.category,
            department: self.department,
            created_at: self.created_at,
            processed_at: self.processed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sample_row() -> ClaimRow {
        ClaimRow {
            claim_id: Uuid::new_v4(),
            tenant_code: "ACME-GRP-01".to_string(),
            amount: Some(dec!(1250.00)),
            approved_amount: None,
            status: "pending".to_string(),
            claim_type: Some("Outpatient".to_string()),
            category: None,
            department: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap(),
            processed_at: None,
        }
    }

    #[test]
    fn test_row_conversion_maps_status_and_defaults() {
        let record = sample_row().into_record().unwrap();

        assert_eq!(record.status, ClaimStatus::Pending);
        assert_eq!(record.amount, Some(dec!(1250.00)));
        assert_eq!(record.category_label(), "Uncategorized");
        assert_eq!(record.department_label(), "Unknown");
    }

    #[test]
    fn test_row_conversion_preserves_unknown_status() {
        let mut row = sample_row();
        row.status = "escalated".to_string();

        let record = row.into_record().unwrap();
        assert_eq!(record.status.as_str(), "escalated");
    }

    #[test]
    fn test_row_conversion_rejects_empty_tenant() {
        let mut row = sample_row();
        row.tenant_code = "".to_string();

        assert!(row.into_record().is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn conversion_preserves_any_status_label(label in "[a-z_]{1,20}") {
                let mut row = sample_row();
                row.status = label.clone();

                let record = row.into_record().unwrap();
                prop_assert_eq!(record.status.as_str(), label.as_str());
            }

            #[test]
            fn conversion_accepts_any_non_blank_tenant(code in "[A-Z0-9-]{1,12}") {
                let mut row = sample_row();
                row.tenant_code = code.clone();

                let record = row.into_record().unwrap();
                prop_assert_eq!(record.tenant_code.as_str(), code.as_str());
            }
        }
    }
}
