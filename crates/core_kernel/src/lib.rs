//! Core Kernel - Foundational types and utilities for the benefits platform
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Strongly-typed identifiers
//! - Tenant code value objects for multi-tenant partitioning
//! - Temporal helpers for calendar-month bucketing and claim age arithmetic

pub mod error;
pub mod identifiers;
pub mod temporal;
pub mod tenant;

pub use error::CoreError;
pub use identifiers::{ClaimId, CorporateId};
pub use temporal::{whole_days_between, MonthKey, TemporalError};
pub use tenant::TenantCode;
