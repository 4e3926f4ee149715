//! HTTP API Layer
//!
//! This crate provides the REST API for the claims analytics core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One handler per report endpoint, plus health probes
//! - **DTOs**: Query-string shapes and the success envelope
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{analytics, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool) -> Router {
    let state = AppState { pool };

    // Public routes (no report filter required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Report routes; all accept the same query parameters
    let report_routes = Router::new()
        .route("/overview", get(analytics::overview))
        .route("/status", get(analytics::status_breakdown))
        .route("/types", get(analytics::type_breakdown))
        .route("/trend", get(analytics::monthly_trend))
        .route("/categories", get(analytics::top_categories))
        .route("/departments", get(analytics::department_breakdown))
        .route("/aging", get(analytics::aging_report))
        .route("/settlement-ratio", get(analytics::settlement_ratio));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1/analytics/claims", report_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_router_builds_without_live_database() {
        // connect_lazy defers the actual connection until first use
        let pool = PgPool::connect_lazy("postgres://localhost/benefits").unwrap();
        let _ = create_router(pool);
    }
}
