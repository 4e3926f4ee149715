//! Aggregation engine
//!
//! Pure, synchronous transforms from a claim snapshot to one report shape.
//! Each function is total over any input: empty collections, missing optional
//! fields, and zero denominators all resolve to well-defined zero/empty
//! results rather than panics or NaN.
//!
//! Callers that need "now" (aging, and the trend cutoff computed upstream)
//! pass it explicitly; the engine never reads the system clock.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use core_kernel::{whole_days_between, MonthKey};

use crate::claim::{ClaimRecord, ClaimStatus};
use crate::report::{
    AgingBucket, CategoryTotal, ClaimsOverview, DepartmentBreakdown, DepartmentStats,
    SettlementSummary, StatusBreakdown, TrendPoint, TypeBreakdown,
};

/// Fixed, non-overlapping age ranges for the aging report, ascending
pub const AGING_RANGES: [&str; 5] = [
    "0-7 days",
    "8-14 days",
    "15-30 days",
    "31-60 days",
    "60+ days",
];

const SECONDS_PER_DAY: i64 = 86_400;

/// Computes headline totals across the filtered claim set
pub fn overview(claims: &[ClaimRecord]) -> ClaimsOverview {
    let mut total_amount = Decimal::ZERO;
    let mut approved_amount = Decimal::ZERO;
    let mut pending_claims = 0u64;
    let mut approved_claims = 0u64;
    let mut rejected_claims = 0u64;

    // Processing time is averaged only over settled claims that actually
    // carry a processed_at; approved claims without one still count toward
    // approved_claims.
    let mut processing_seconds = 0i64;
    let mut processed_count = 0u64;

    for claim in claims {
        total_amount += claim.amount_or_zero();
        approved_amount += claim.approved_amount_or_zero();

        match claim.status {
            ClaimStatus::Pending => pending_claims += 1,
            ClaimStatus::Approved => approved_claims += 1,
            ClaimStatus::Rejected => rejected_claims += 1,
            ClaimStatus::Other(_) => {}
        }

        if claim.status.is_settled() {
            if let Some(processed_at) = claim.processed_at {
                processing_seconds += (processed_at - claim.created_at).num_seconds();
                processed_count += 1;
            }
        }
    }

    let total_claims = claims.len() as u64;
    let average_claim_amount = if total_claims == 0 {
        Decimal::ZERO
    } else {
        total_amount / Decimal::from(total_claims)
    };

    let average_processing_time = if processed_count == 0 {
        0
    } else {
        let mean_days = Decimal::from(processing_seconds)
            / (Decimal::from(processed_count) * Decimal::from(SECONDS_PER_DAY));
        round_half_up(mean_days).to_i64().unwrap_or(0)
    };

    ClaimsOverview {
        total_claims,
        total_amount,
        approved_amount,
        pending_claims,
        approved_claims,
        rejected_claims,
        average_claim_amount,
        average_processing_time,
    }
}

/// Counts claims grouped by raw status label
///
/// Unrecognized labels become their own keys; nothing is dropped.
pub fn status_breakdown(claims: &[ClaimRecord]) -> StatusBreakdown {
    let mut counts = StatusBreakdown::new();
    for claim in claims {
        *counts.entry(claim.status.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Accumulates `{count, amount}` per distinct claim type
///
/// Claims without a type are excluded entirely rather than merged into a
/// synthetic bucket.
pub fn type_breakdown(claims: &[ClaimRecord]) -> TypeBreakdown {
    let mut types = TypeBreakdown::new();
    for claim in claims {
        let Some(claim_type) = claim.claim_type.as_deref() else {
            continue;
        };
        let stats = types.entry(claim_type.to_string()).or_default();
        stats.count += 1;
        stats.amount += claim.amount_or_zero();
    }
    types
}

/// Buckets claims by calendar month of submission, ascending
///
/// The input is expected to be pre-restricted to the trend window by the
/// source fetch. Months with no claims do not appear; the output is sparse.
pub fn monthly_trend(claims: &[ClaimRecord]) -> Vec<TrendPoint> {
    #[derive(Default)]
    struct MonthAccum {
        count: u64,
        amount: Decimal,
        approved: u64,
        rejected: u64,
    }

    let mut months: BTreeMap<MonthKey, MonthAccum> = BTreeMap::new();
    for claim in claims {
        let accum = months
            .entry(MonthKey::from_datetime(claim.created_at))
            .or_default();
        accum.count += 1;
        accum.amount += claim.amount_or_zero();
        match claim.status {
            ClaimStatus::Approved => accum.approved += 1,
            ClaimStatus::Rejected => accum.rejected += 1,
            _ => {}
        }
    }

    // BTreeMap iteration yields calendar order, which matches lexicographic
    // order of the zero-padded keys.
    months
        .into_iter()
        .map(|(month, accum)| TrendPoint {
            month,
            count: accum.count,
            amount: accum.amount,
            approved: accum.approved,
            rejected: accum.rejected,
        })
        .collect()
}

/// Groups claims by category and returns the top `limit` by summed amount
///
/// Ties on amount break by category name ascending, so equal-amount inputs
/// always produce the same ordering.
pub fn top_categories(claims: &[ClaimRecord], limit: usize) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, (u64, Decimal)> = BTreeMap::new();
    for claim in claims {
        let entry = totals.entry(claim.category_label()).or_default();
        entry.0 += 1;
        entry.1 += claim.amount_or_zero();
    }

    let mut categories: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, (count, amount))| CategoryTotal {
            category: category.to_string(),
            count,
            amount,
        })
        .collect();

    categories.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    categories.truncate(limit);
    categories
}

/// Accumulates `{count, amount, approved, rejected}` per department
pub fn department_breakdown(claims: &[ClaimRecord]) -> DepartmentBreakdown {
    let mut departments = DepartmentBreakdown::new();
    for claim in claims {
        let stats: &mut DepartmentStats = departments
            .entry(claim.department_label().to_string())
            .or_default();
        stats.count += 1;
        stats.amount += claim.amount_or_zero();
        match claim.status {
            ClaimStatus::Approved => stats.approved += 1,
            ClaimStatus::Rejected => stats.rejected += 1,
            _ => {}
        }
    }
    departments
}

/// Places each pending claim into exactly one fixed age bucket
///
/// All five buckets are pre-seeded and present in the output even when
/// empty. Non-pending claims in the snapshot are ignored, so the function is
/// total even if the caller's fetch was not restricted.
pub fn aging_report(claims: &[ClaimRecord], now: DateTime<Utc>) -> Vec<AgingBucket> {
    let mut buckets: Vec<AgingBucket> = AGING_RANGES
        .iter()
        .map(|&range| AgingBucket {
            range,
            count: 0,
            amount: Decimal::ZERO,
        })
        .collect();

    for claim in claims.iter().filter(|c| c.status == ClaimStatus::Pending) {
        let age_days = whole_days_between(claim.created_at, now);
        let index = match age_days {
            i64::MIN..=7 => 0,
            8..=14 => 1,
            15..=30 => 2,
            31..=60 => 3,
            _ => 4,
        };
        buckets[index].count += 1;
        buckets[index].amount += claim.amount_or_zero();
    }

    buckets
}

/// Computes aggregate settlement figures over approved claims
///
/// `settlement_ratio` is a whole-number percentage; a zero claimed total
/// yields a zero ratio rather than a division fault.
pub fn settlement_ratio(claims: &[ClaimRecord]) -> SettlementSummary {
    let mut total_claimed = Decimal::ZERO;
    let mut total_approved = Decimal::ZERO;

    for claim in claims.iter().filter(|c| c.status == ClaimStatus::Approved) {
        total_claimed += claim.amount_or_zero();
        total_approved += claim.approved_amount_or_zero();
    }

    let settlement_ratio = if total_claimed.is_zero() {
        0
    } else {
        round_half_up(total_approved / total_claimed * Decimal::ONE_HUNDRED)
            .to_u32()
            .unwrap_or(0)
    };

    SettlementSummary {
        total_claimed,
        total_approved,
        settlement_ratio,
    }
}

// The platform's historical rounding is half-away-from-zero, not the
// banker's rounding rust_decimal defaults to.
fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
