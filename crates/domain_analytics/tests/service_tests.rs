//! Tests for the analytics service: fetch wiring, filter semantics, and
//! error propagation through the claim source port

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use domain_analytics::{AnalyticsService, ClaimFilter, DEFAULT_CATEGORY_LIMIT, DEFAULT_TREND_MONTHS};
use test_utils::builders::ClaimRecordBuilder;
use test_utils::fixtures::{TemporalFixtures, TenantFixtures};
use test_utils::sources::{FailingClaimSource, InMemoryClaimSource};

// ============================================================================
// Filter Semantics
// ============================================================================

#[tokio::test]
async fn test_tenant_filter_is_exact_match() {
    let source = InMemoryClaimSource::new(vec![
        ClaimRecordBuilder::new()
            .with_tenant(TenantFixtures::acme())
            .with_amount(dec!(100))
            .build(),
        ClaimRecordBuilder::new()
            .with_tenant(TenantFixtures::globex())
            .with_amount(dec!(900))
            .build(),
    ]);
    let service = AnalyticsService::new(source);

    let overview = service
        .overview(&ClaimFilter::for_tenant(TenantFixtures::acme()))
        .await
        .unwrap();

    assert_eq!(overview.total_claims, 1);
    assert_eq!(overview.total_amount, dec!(100));
}

#[tokio::test]
async fn test_date_window_is_inclusive_at_both_ends() {
    let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();

    let source = InMemoryClaimSource::new(vec![
        ClaimRecordBuilder::new().with_created_at(start).build(),
        ClaimRecordBuilder::new().with_created_at(end).build(),
        ClaimRecordBuilder::new()
            .with_created_at(start - chrono::Duration::seconds(1))
            .build(),
        ClaimRecordBuilder::new()
            .with_created_at(end + chrono::Duration::seconds(1))
            .build(),
    ]);
    let service = AnalyticsService::new(source);

    let overview = service
        .overview(&ClaimFilter::all().between(start, end))
        .await
        .unwrap();

    assert_eq!(overview.total_claims, 2);
}

#[tokio::test]
async fn test_empty_filter_retains_everything() {
    let source = InMemoryClaimSource::new(vec![
        ClaimRecordBuilder::new().with_tenant(TenantFixtures::acme()).build(),
        ClaimRecordBuilder::new().with_tenant(TenantFixtures::globex()).build(),
    ]);
    let service = AnalyticsService::new(source);

    let overview = service.overview(&ClaimFilter::all()).await.unwrap();
    assert_eq!(overview.total_claims, 2);
}

// ============================================================================
// Per-Report Fetch Restrictions
// ============================================================================

#[tokio::test]
async fn test_aging_fetches_pending_claims_only() {
    let now = TemporalFixtures::reporting_now();
    let source = InMemoryClaimSource::new(vec![
        ClaimRecordBuilder::new()
            .with_created_at(TemporalFixtures::submitted_days_ago(3))
            .build(),
        ClaimRecordBuilder::new()
            .with_created_at(TemporalFixtures::submitted_days_ago(3))
            .approved(dec!(100))
            .build(),
        ClaimRecordBuilder::new()
            .with_created_at(TemporalFixtures::submitted_days_ago(3))
            .rejected()
            .build(),
    ]);
    let service = AnalyticsService::new(source);

    let buckets = service.aging_report(&ClaimFilter::all(), now).await.unwrap();
    let total: u64 = buckets.iter().map(|b| b.count).sum();
    assert_eq!(total, 1);
}

#[tokio::test]
async fn test_settlement_fetches_approved_claims_only() {
    let source = InMemoryClaimSource::new(vec![
        ClaimRecordBuilder::new()
            .with_amount(dec!(1000))
            .approved(dec!(800))
            .build(),
        ClaimRecordBuilder::new().with_amount(dec!(5000)).build(),
    ]);
    let service = AnalyticsService::new(source);

    let summary = service.settlement_ratio(&ClaimFilter::all()).await.unwrap();
    assert_eq!(summary.total_claimed, dec!(1000));
    assert_eq!(summary.settlement_ratio, 80);
}

#[tokio::test]
async fn test_trend_cutoff_is_calendar_months_before_now() {
    let now = TemporalFixtures::reporting_now(); // Jun 15, 2024
    let source = InMemoryClaimSource::new(vec![
        // Two months back: inside a 3-month window
        ClaimRecordBuilder::new()
            .with_created_at(Utc.with_ymd_and_hms(2024, 4, 20, 0, 0, 0).unwrap())
            .build(),
        // Four months back: outside
        ClaimRecordBuilder::new()
            .with_created_at(Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap())
            .build(),
        // Exactly at the cutoff instant: included
        ClaimRecordBuilder::new()
            .with_created_at(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
            .build(),
    ]);
    let service = AnalyticsService::new(source);

    let trend = service
        .monthly_trend(&ClaimFilter::all(), 3, now)
        .await
        .unwrap();

    let months: Vec<String> = trend.iter().map(|p| p.month.to_string()).collect();
    assert_eq!(months, vec!["2024-03", "2024-04"]);
}

#[tokio::test]
async fn test_default_windows() {
    assert_eq!(DEFAULT_TREND_MONTHS, 12);
    assert_eq!(DEFAULT_CATEGORY_LIMIT, 10);
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[tokio::test]
async fn test_every_report_is_well_defined_on_empty_source() {
    let service = AnalyticsService::new(InMemoryClaimSource::default());
    let filter = ClaimFilter::all();
    let now = TemporalFixtures::reporting_now();

    let overview = service.overview(&filter).await.unwrap();
    assert_eq!(overview.total_claims, 0);
    assert_eq!(overview.average_claim_amount, rust_decimal::Decimal::ZERO);

    assert!(service.status_breakdown(&filter).await.unwrap().is_empty());
    assert!(service.type_breakdown(&filter).await.unwrap().is_empty());
    assert!(service.monthly_trend(&filter, DEFAULT_TREND_MONTHS, now).await.unwrap().is_empty());
    assert!(service
        .top_categories(&filter, DEFAULT_CATEGORY_LIMIT)
        .await
        .unwrap()
        .is_empty());
    assert!(service.department_breakdown(&filter).await.unwrap().is_empty());

    let buckets = service.aging_report(&filter, now).await.unwrap();
    assert_eq!(buckets.len(), 5);
    assert!(buckets.iter().all(|b| b.count == 0));

    let summary = service.settlement_ratio(&filter).await.unwrap();
    assert_eq!(summary.settlement_ratio, 0);
}

// ============================================================================
// Error Propagation
// ============================================================================

#[tokio::test]
async fn test_source_failure_aborts_every_report() {
    let service = AnalyticsService::new(FailingClaimSource::new("row store unreachable"));
    let filter = ClaimFilter::all();
    let now = TemporalFixtures::reporting_now();

    assert!(service.overview(&filter).await.is_err());
    assert!(service.status_breakdown(&filter).await.is_err());
    assert!(service.type_breakdown(&filter).await.is_err());
    assert!(service.monthly_trend(&filter, 12, now).await.is_err());
    assert!(service.top_categories(&filter, 10).await.is_err());
    assert!(service.department_breakdown(&filter).await.is_err());
    assert!(service.aging_report(&filter, now).await.is_err());
    assert!(service.settlement_ratio(&filter).await.is_err());
}

#[tokio::test]
async fn test_source_failure_message_is_propagated_unchanged() {
    let service = AnalyticsService::new(FailingClaimSource::new("row store unreachable"));

    let error = service.overview(&ClaimFilter::all()).await.unwrap_err();
    assert!(error.to_string().contains("row store unreachable"));
}

// ============================================================================
// Idempotence
// ============================================================================

#[tokio::test]
async fn test_repeated_calls_on_unchanged_source_are_identical() {
    let source = InMemoryClaimSource::new(vec![
        ClaimRecordBuilder::new()
            .with_amount(dec!(1000))
            .approved(dec!(800))
            .processed_after_days(5)
            .build(),
        ClaimRecordBuilder::new().with_amount(dec!(500)).build(),
    ]);
    let service = AnalyticsService::new(source);
    let filter = ClaimFilter::all();

    let first = service.overview(&filter).await.unwrap();
    let second = service.overview(&filter).await.unwrap();
    assert_eq!(first, second);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
