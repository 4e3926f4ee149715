//! Pre-built Test Fixtures
//!
//! Provides ready-to-use, deterministic test data for the analytics suite.
//! Aging and trend computations take "now" as a parameter, so every test
//! anchors on [`TemporalFixtures::reporting_now`] instead of the system clock.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ClaimId, TenantCode};
use uuid::Uuid;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The fixed "now" every report computation is anchored on
    /// (Jun 15, 2024 12:00 UTC)
    pub fn reporting_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// Default claim submission instant (Mar 15, 2024 10:00 UTC)
    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    /// Start of the standard reporting window (Jan 1, 2024)
    pub fn window_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// End of the standard reporting window (Dec 31, 2024)
    pub fn window_end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()
    }

    /// A submission instant `days` whole days before `reporting_now`
    pub fn submitted_days_ago(days: i64) -> DateTime<Utc> {
        Self::reporting_now() - chrono::Duration::days(days)
    }
}

/// Fixture for tenant test data
pub struct TenantFixtures;

impl TenantFixtures {
    /// Primary test tenant
    pub fn acme() -> TenantCode {
        TenantCode::new("ACME-GRP-01").expect("valid fixture tenant code")
    }

    /// Secondary tenant for cross-tenant isolation tests
    pub fn globex() -> TenantCode {
        TenantCode::new("GLOBEX-GRP-02").expect("valid fixture tenant code")
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic claim ID for testing
    pub fn claim_id() -> ClaimId {
        ClaimId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_fixtures_ordering() {
        assert!(TemporalFixtures::window_start() < TemporalFixtures::submitted_at());
        assert!(TemporalFixtures::submitted_at() < TemporalFixtures::reporting_now());
        assert!(TemporalFixtures::reporting_now() < TemporalFixtures::window_end());
    }

    #[test]
    fn test_submitted_days_ago_counts_back_from_now() {
        let three_days = TemporalFixtures::submitted_days_ago(3);
        assert_eq!(
            TemporalFixtures::reporting_now() - three_days,
            chrono::Duration::days(3)
        );
    }

    #[test]
    fn test_id_fixtures_are_deterministic() {
        assert_eq!(IdFixtures::claim_id(), IdFixtures::claim_id());
    }
}
