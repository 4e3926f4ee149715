//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random claim data that
//! maintains domain invariants: `processed_at` only on settled claims and
//! never before submission, `approved_amount` only on approved claims and
//! never above the claimed amount.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::ClaimId;
use domain_analytics::{ClaimRecord, ClaimStatus};

use crate::fixtures::TenantFixtures;

/// Strategy for generating claim statuses, including open-enumeration labels
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        3 => Just(ClaimStatus::Pending),
        3 => Just(ClaimStatus::Approved),
        2 => Just(ClaimStatus::Rejected),
        1 => prop_oneof![
            Just("escalated".to_string()),
            Just("under_review".to_string()),
            Just("on_hold".to_string()),
        ]
        .prop_map(ClaimStatus::Other),
    ]
}

/// Strategy for generating non-negative claimed amounts (two decimal places)
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for generating optionally-absent claimed amounts
pub fn optional_amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::weighted(0.9, amount_strategy())
}

/// Strategy for generating claim types, sometimes absent
pub fn claim_type_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::weighted(
        0.8,
        prop_oneof![
            Just("Outpatient".to_string()),
            Just("Inpatient".to_string()),
            Just("Dental".to_string()),
            Just("Vision".to_string()),
            Just("Pharmacy".to_string()),
        ],
    )
}

/// Strategy for generating categories, sometimes absent
pub fn category_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::weighted(
        0.8,
        prop_oneof![
            Just("Consultation".to_string()),
            Just("Surgery".to_string()),
            Just("Diagnostics".to_string()),
            Just("Wellness".to_string()),
        ],
    )
}

/// Strategy for generating departments, sometimes absent
pub fn department_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::weighted(
        0.8,
        prop_oneof![
            Just("Engineering".to_string()),
            Just("Sales".to_string()),
            Just("Operations".to_string()),
            Just("Finance".to_string()),
        ],
    )
}

/// Strategy for generating submission instants within 2024
pub fn timestamp_2024_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..365i64, 0i64..24i64).prop_map(|(days, hours)| {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(days)
            + Duration::hours(hours)
    })
}

/// Strategy for generating whole claim records
///
/// Approved payouts are a fraction of the claimed amount, so the settlement
/// ratio invariant (`approved_amount <= amount`) always holds.
pub fn claim_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        status_strategy(),
        optional_amount_strategy(),
        0u32..=10_000u32, // payout fraction in basis points
        timestamp_2024_strategy(),
        0i64..90i64, // processing delay in days
        claim_type_strategy(),
        category_strategy(),
        department_strategy(),
        proptest::bool::weighted(0.9), // settled claims usually carry processed_at
    )
        .prop_map(
            |(status, amount, payout_bp, created_at, delay_days, claim_type, category, department, stamped)| {
                let approved_amount = match status {
                    ClaimStatus::Approved => {
                        let claimed = amount.unwrap_or(Decimal::ZERO);
                        Some((claimed * Decimal::new(payout_bp as i64, 4)).round_dp(2))
                    }
                    _ => None,
                };
                let processed_at = if status.is_settled() && stamped {
                    Some(created_at + Duration::days(delay_days))
                } else {
                    None
                };
                ClaimRecord {
                    id: ClaimId::new(),
                    tenant_code: TenantFixtures::acme(),
                    amount,
                    approved_amount,
                    status,
                    claim_type,
                    category,
                    department,
                    created_at,
                    processed_at,
                }
            },
        )
}

/// Strategy for generating claim collections up to `max` records
pub fn claims_strategy(max: usize) -> impl Strategy<Value = Vec<ClaimRecord>> {
    proptest::collection::vec(claim_strategy(), 0..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_claims_keep_payout_invariant(claim in claim_strategy()) {
            if claim.status != ClaimStatus::Approved {
                prop_assert!(claim.approved_amount.is_none());
            } else if let Some(approved) = claim.approved_amount {
                prop_assert!(approved <= claim.amount.unwrap_or(Decimal::ZERO));
            }
        }

        #[test]
        fn generated_claims_keep_processing_invariant(claim in claim_strategy()) {
            if let Some(processed_at) = claim.processed_at {
                prop_assert!(claim.status.is_settled());
                prop_assert!(processed_at >= claim.created_at);
            }
        }
    }
}
