//! Claims Analytics Domain
//!
//! This crate implements the aggregation engine that turns a snapshot of raw
//! claim records into derived reports: overview totals, status/type/department
//! breakdowns, monthly trend, top categories, pending-claim aging, and the
//! settlement ratio.
//!
//! # Architecture
//!
//! ```text
//! ClaimSource (port) --fetch--> [ClaimRecord] --pure transform--> report
//! ```
//!
//! The engine itself ([`engine`]) is a set of pure, synchronous functions over
//! an in-memory claim slice; it holds no state, never mutates its input, and
//! takes "now" as an explicit parameter. The only asynchronous boundary is the
//! [`ClaimSource`] fetch, awaited once per report by [`AnalyticsService`]. A
//! fetch failure aborts the whole report and propagates unchanged.

pub mod claim;
pub mod engine;
pub mod filter;
pub mod ports;
pub mod report;
pub mod service;

pub use claim::{ClaimRecord, ClaimStatus};
pub use filter::ClaimFilter;
pub use ports::{ClaimSource, SourceError};
pub use report::{
    AgingBucket, CategoryTotal, ClaimsOverview, DepartmentBreakdown, DepartmentStats,
    SettlementSummary, StatusBreakdown, TrendPoint, TypeBreakdown, TypeStats,
};
pub use service::{AnalyticsService, DEFAULT_CATEGORY_LIMIT, DEFAULT_TREND_MONTHS};
