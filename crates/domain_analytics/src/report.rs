//! Report output shapes
//!
//! One type per report operation. All shapes serialize with camelCase field
//! names to match the platform's JSON contract, and all are plain data:
//! constructing a report never mutates or retains the input claims.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use core_kernel::MonthKey;

/// Count of claims per raw status label
///
/// Unknown status labels are their own keys; a `BTreeMap` keeps the output
/// deterministic.
pub type StatusBreakdown = BTreeMap<String, u64>;

/// Per-type accumulation for the type breakdown
pub type TypeBreakdown = BTreeMap<String, TypeStats>;

/// Per-department accumulation for the department breakdown
pub type DepartmentBreakdown = BTreeMap<String, DepartmentStats>;

/// Headline totals across a filtered claim set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsOverview {
    pub total_claims: u64,
    pub total_amount: Decimal,
    pub approved_amount: Decimal,
    pub pending_claims: u64,
    pub approved_claims: u64,
    pub rejected_claims: u64,
    /// `total_amount / total_claims`; zero when the set is empty
    pub average_claim_amount: Decimal,
    /// Mean days from submission to processing over settled claims that
    /// carry a `processed_at`, rounded to the nearest whole day
    pub average_processing_time: i64,
}

/// Count and claimed amount for one claim type
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStats {
    pub count: u64,
    pub amount: Decimal,
}

/// One calendar month of the trend report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Zero-padded `YYYY-MM` bucket key
    pub month: MonthKey,
    pub count: u64,
    pub amount: Decimal,
    pub approved: u64,
    pub rejected: u64,
}

/// One entry of the top-categories report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub count: u64,
    pub amount: Decimal,
}

/// Count, claimed amount, and settled counts for one department
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub count: u64,
    pub amount: Decimal,
    pub approved: u64,
    pub rejected: u64,
}

/// One fixed age range of the pending-claim aging report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingBucket {
    /// Fixed bucket label, e.g. `"0-7 days"`
    pub range: &'static str,
    pub count: u64,
    pub amount: Decimal,
}

/// Aggregate settlement figures over approved claims
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    pub total_claimed: Decimal,
    pub total_approved: Decimal,
    /// `round(total_approved / total_claimed * 100)`; zero when nothing
    /// was claimed
    pub settlement_ratio: u32,
}
