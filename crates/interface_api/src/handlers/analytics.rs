//! Analytics report handlers
//!
//! Each handler wires a report endpoint to the analytics service over the
//! PostgreSQL claim store. The reporting instant is captured once per request
//! with `Utc::now()` and threaded through; the service and engine never read
//! the clock themselves.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use domain_analytics::{
    AgingBucket, AnalyticsService, CategoryTotal, ClaimsOverview, DepartmentBreakdown,
    SettlementSummary, StatusBreakdown, TrendPoint, TypeBreakdown, DEFAULT_CATEGORY_LIMIT,
    DEFAULT_TREND_MONTHS,
};
use infra_db::ClaimStore;

use crate::dto::analytics::{ReportEnvelope, ReportQuery};
use crate::error::ApiError;
use crate::AppState;

fn service(state: &AppState) -> AnalyticsService<ClaimStore> {
    AnalyticsService::new(ClaimStore::new(state.pool.clone()))
}

/// Headline figures across the filtered claims
pub async fn overview(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope<ClaimsOverview>>, ApiError> {
    let filter = query.into_filter()?;
    let report = service(&state).overview(&filter).await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Claim counts per status label
pub async fn status_breakdown(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope<StatusBreakdown>>, ApiError> {
    let filter = query.into_filter()?;
    let report = service(&state).status_breakdown(&filter).await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Count and amount per claim type
pub async fn type_breakdown(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope<TypeBreakdown>>, ApiError> {
    let filter = query.into_filter()?;
    let report = service(&state).type_breakdown(&filter).await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Monthly submission trend over a calendar-month window
pub async fn monthly_trend(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope<Vec<TrendPoint>>>, ApiError> {
    let months = query.months.unwrap_or(DEFAULT_TREND_MONTHS);
    let filter = query.into_filter()?;
    let report = service(&state)
        .monthly_trend(&filter, months, Utc::now())
        .await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Top categories by summed claimed amount
pub async fn top_categories(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope<Vec<CategoryTotal>>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_CATEGORY_LIMIT);
    let filter = query.into_filter()?;
    let report = service(&state).top_categories(&filter, limit).await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Per-department counts, amounts, and settled counts
pub async fn department_breakdown(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope<DepartmentBreakdown>>, ApiError> {
    let filter = query.into_filter()?;
    let report = service(&state).department_breakdown(&filter).await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Age buckets over unresolved claims
pub async fn aging_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope<Vec<AgingBucket>>>, ApiError> {
    let filter = query.into_filter()?;
    let report = service(&state).aging_report(&filter, Utc::now()).await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Aggregate settlement figures over approved claims
pub async fn settlement_ratio(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope<SettlementSummary>>, ApiError> {
    let filter = query.into_filter()?;
    let report = service(&state).settlement_ratio(&filter).await?;
    Ok(Json(ReportEnvelope::ok(report)))
}
