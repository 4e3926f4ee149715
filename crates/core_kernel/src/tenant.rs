//! Tenant code value object
//!
//! Every row in the platform is partitioned by a tenant (corporate) code.
//! Filtering by tenant is always an exact string match, so the code is kept
//! as an opaque, validated value rather than an identifier with structure.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// An opaque tenant partition key
///
/// Tenant codes are assigned by the administration layer (e.g. "ACME-GRP-01")
/// and compared byte-for-byte; no case folding or trimming is applied after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantCode(String);

impl TenantCode {
    /// Creates a tenant code, rejecting empty or whitespace-only input
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CoreError::validation("Tenant code must not be empty"));
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TenantCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
