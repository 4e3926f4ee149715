//! Temporal helpers for analytics bucketing
//!
//! This module provides the calendar arithmetic the analytics engine relies
//! on: truncating timestamps to calendar months for trend bucketing, and
//! whole-day age arithmetic for aging reports and processing-time averages.

use chrono::{DateTime, Datelike, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month key: {0}")]
    InvalidMonthKey(String),
}

/// A calendar month bucket key
///
/// Serializes as a zero-padded `YYYY-MM` string, so lexicographic order of
/// the serialized form agrees with the derived calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Truncates a timestamp to its calendar month
    pub fn from_datetime(ts: DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }

    /// Returns the year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl FromStr for MonthKey {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TemporalError::InvalidMonthKey(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

/// Returns the number of whole days between two instants
///
/// Fractional days are truncated toward zero, matching the "floor of elapsed
/// days" semantics of claim aging. Returns a negative count when `later`
/// precedes `earlier`.
pub fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_days()
}
