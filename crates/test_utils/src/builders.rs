//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, TenantCode};
use domain_analytics::{ClaimRecord, ClaimStatus};

use crate::fixtures::{TemporalFixtures, TenantFixtures};

/// Builder for constructing test claim records
///
/// Defaults to a pending claim for the primary test tenant, submitted at
/// [`TemporalFixtures::submitted_at`] with a 1000.00 claimed amount.
pub struct ClaimRecordBuilder {
    id: ClaimId,
    tenant_code: TenantCode,
    amount: Option<Decimal>,
    approved_amount: Option<Decimal>,
    status: ClaimStatus,
    claim_type: Option<String>,
    category: Option<String>,
    department: Option<String>,
    created_at: DateTime<Utc>,
    processed_at: Option<DateTime<Utc>>,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(),
            tenant_code: TenantFixtures::acme(),
            amount: Some(dec!(1000.00)),
            approved_amount: None,
            status: ClaimStatus::Pending,
            claim_type: Some("Outpatient".to_string()),
            category: Some("Consultation".to_string()),
            department: Some("Engineering".to_string()),
            created_at: TemporalFixtures::submitted_at(),
            processed_at: None,
        }
    }

    /// Sets the claim ID
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    /// Sets the tenant code
    pub fn with_tenant(mut self, tenant_code: TenantCode) -> Self {
        self.tenant_code = tenant_code;
        self
    }

    /// Sets the claimed amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Clears the claimed amount (treated as zero by the engine)
    pub fn without_amount(mut self) -> Self {
        self.amount = None;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the claim approved with the given payout
    ///
    /// Leaves `processed_at` untouched so tests can exercise approved claims
    /// that were never stamped.
    pub fn approved(mut self, approved_amount: Decimal) -> Self {
        self.status = ClaimStatus::Approved;
        self.approved_amount = Some(approved_amount);
        self
    }

    /// Marks the claim rejected
    pub fn rejected(mut self) -> Self {
        self.status = ClaimStatus::Rejected;
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = Some(claim_type.into());
        self
    }

    /// Clears the claim type (excluded from type stats)
    pub fn without_claim_type(mut self) -> Self {
        self.claim_type = None;
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Clears the category (defaults to "Uncategorized")
    pub fn without_category(mut self) -> Self {
        self.category = None;
        self
    }

    /// Sets the department
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Clears the department (defaults to "Unknown")
    pub fn without_department(mut self) -> Self {
        self.department = None;
        self
    }

    /// Sets the submission instant
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the processing instant
    pub fn with_processed_at(mut self, processed_at: DateTime<Utc>) -> Self {
        self.processed_at = Some(processed_at);
        self
    }

    /// Stamps `processed_at` a whole number of days after submission
    pub fn processed_after_days(mut self, days: i64) -> Self {
        self.processed_at = Some(self.created_at + chrono::Duration::days(days));
        self
    }

    /// Builds the claim record
    pub fn build(self) -> ClaimRecord {
        ClaimRecord {
            id: self.id,
            tenant_code: self.tenant_code,
            amount: self.amount,
            approved_amount: self.approved_amount,
            status: self.status,
            claim_type: self.claim_type,
            category: self.category,
            department: self.department,
            created_at: self.created_at,
            processed_at: self.processed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let claim = ClaimRecordBuilder::new().build();
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.amount, Some(dec!(1000.00)));
        assert!(claim.approved_amount.is_none());
        assert!(claim.processed_at.is_none());
    }

    #[test]
    fn test_approved_sets_status_and_payout() {
        let claim = ClaimRecordBuilder::new().approved(dec!(800.00)).build();
        assert_eq!(claim.status, ClaimStatus::Approved);
        assert_eq!(claim.approved_amount, Some(dec!(800.00)));
    }

    #[test]
    fn test_processed_after_days_is_relative_to_submission() {
        let claim = ClaimRecordBuilder::new().rejected().processed_after_days(4).build();
        let elapsed = claim.processed_at.unwrap() - claim.created_at;
        assert_eq!(elapsed, chrono::Duration::days(4));
    }
}
