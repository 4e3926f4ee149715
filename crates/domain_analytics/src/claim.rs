//! Claim record model
//!
//! Claims arrive from the row store with loosely-populated fields: amounts,
//! categories, and processing timestamps may all be absent. Rather than
//! scattering null-checks through every aggregation, the record exposes total
//! accessor methods that apply the platform's defaults at the boundary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use core_kernel::{ClaimId, TenantCode};

/// Sentinel bucket for claims without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Sentinel bucket for claims without a department
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Claim status
///
/// This is an open enumeration: the administration layer can introduce new
/// status labels at any time, and the engine must preserve them verbatim when
/// bucketing rather than dropping or merging them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClaimStatus {
    /// Awaiting adjudication
    Pending,
    /// Approved for payout
    Approved,
    /// Rejected
    Rejected,
    /// Any label the engine does not recognize, preserved verbatim
    Other(String),
}

impl ClaimStatus {
    /// Parses a raw status label; unrecognized labels are preserved
    pub fn parse(label: &str) -> Self {
        match label {
            "pending" => ClaimStatus::Pending,
            "approved" => ClaimStatus::Approved,
            "rejected" => ClaimStatus::Rejected,
            other => ClaimStatus::Other(other.to_string()),
        }
    }

    /// Returns the raw status label
    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Other(label) => label,
        }
    }

    /// Returns true once a claim has left the pending state
    pub fn is_settled(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

impl Serialize for ClaimStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClaimStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(ClaimStatus::parse(&label))
    }
}

/// A single reimbursement claim as supplied by the source collaborator
///
/// Invariants (enforced by the administration layer, relied on here):
/// - `processed_at`, when present, is `>= created_at`
/// - `approved_amount` is only meaningful when `status == approved`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Unique identifier
    pub id: ClaimId,
    /// Tenant partition key
    pub tenant_code: TenantCode,
    /// Claimed amount; absent is treated as zero
    pub amount: Option<Decimal>,
    /// Approved payout, present only on approved claims
    pub approved_amount: Option<Decimal>,
    /// Status label (open enumeration)
    pub status: ClaimStatus,
    /// Free-text claim type; absent claims are excluded from type stats
    pub claim_type: Option<String>,
    /// Free-text category
    pub category: Option<String>,
    /// Free-text department
    pub department: Option<String>,
    /// Submission instant
    pub created_at: DateTime<Utc>,
    /// Set once the claim is approved or rejected
    pub processed_at: Option<DateTime<Utc>>,
}

impl ClaimRecord {
    /// Claimed amount with the missing-value default applied
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    /// Approved payout, read only off approved claims
    ///
    /// Returns zero for any other status regardless of what the row carries,
    /// so stale `approved_amount` values on re-opened claims cannot leak into
    /// settlement figures.
    pub fn approved_amount_or_zero(&self) -> Decimal {
        match self.status {
            ClaimStatus::Approved => self.approved_amount.unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    /// Category label with the `"Uncategorized"` default applied
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Department label with the `"Unknown"` default applied
    pub fn department_label(&self) -> &str {
        self.department.as_deref().unwrap_or(UNKNOWN_DEPARTMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_known_labels() {
        assert_eq!(ClaimStatus::parse("pending"), ClaimStatus::Pending);
        assert_eq!(ClaimStatus::parse("approved"), ClaimStatus::Approved);
        assert_eq!(ClaimStatus::parse("rejected"), ClaimStatus::Rejected);
    }

    #[test]
    fn test_status_preserves_unknown_labels() {
        let status = ClaimStatus::parse("under_review");
        assert_eq!(status, ClaimStatus::Other("under_review".to_string()));
        assert_eq!(status.as_str(), "under_review");
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        // "Pending" is not the platform's canonical label; it stays verbatim
        assert_eq!(
            ClaimStatus::parse("Pending"),
            ClaimStatus::Other("Pending".to_string())
        );
    }

    #[test]
    fn test_status_serde_round_trip() {
        for label in ["pending", "approved", "rejected", "escalated"] {
            let json = format!("\"{}\"", label);
            let status: ClaimStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(serde_json::to_string(&status).unwrap(), json);
        }
    }

    #[test]
    fn test_is_settled() {
        assert!(ClaimStatus::Approved.is_settled());
        assert!(ClaimStatus::Rejected.is_settled());
        assert!(!ClaimStatus::Pending.is_settled());
        assert!(!ClaimStatus::Other("escalated".to_string()).is_settled());
    }
}
