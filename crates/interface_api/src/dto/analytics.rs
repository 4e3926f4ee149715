//! Analytics DTOs
//!
//! The report bodies themselves are serialized straight from the domain's
//! report types; this module only adds the query-string shape and the
//! success envelope around them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::TenantCode;
use domain_analytics::ClaimFilter;

use crate::error::ApiError;

/// Common query parameters accepted by every report endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// Restrict to a single tenant (exact match)
    pub tenant_code: Option<String>,
    /// Inclusive lower bound on claim creation time
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on claim creation time
    pub end_date: Option<DateTime<Utc>>,
    /// Trend window in calendar months (trend endpoint only)
    pub months: Option<u32>,
    /// Maximum number of categories (categories endpoint only)
    pub limit: Option<usize>,
}

impl ReportQuery {
    /// Converts the query into the uniform report filter
    pub fn into_filter(self) -> Result<ClaimFilter, ApiError> {
        let tenant_code = self
            .tenant_code
            .map(TenantCode::new)
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ClaimFilter {
            tenant_code,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

/// Uniform success envelope around a report body
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ReportEnvelope<T> {
    /// Wraps a report body in the success envelope
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_query_into_filter_validates_tenant() {
        let query = ReportQuery {
            tenant_code: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(query.into_filter().is_err());
    }

    #[test]
    fn test_query_into_filter_keeps_window() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let query = ReportQuery {
            tenant_code: Some("ACME-GRP-01".to_string()),
            start_date: Some(start),
            ..Default::default()
        };

        let filter = query.into_filter().unwrap();
        assert_eq!(filter.start_date, Some(start));
        assert_eq!(filter.end_date, None);
        assert_eq!(filter.tenant_code.unwrap().as_str(), "ACME-GRP-01");
    }

    #[test]
    fn test_envelope_serializes_success_flag() {
        let envelope = ReportEnvelope::ok(vec![1u64, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], 1);
    }
}
