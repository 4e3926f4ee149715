//! Database error types
//!
//! This module defines the error types that can occur during database
//! operations, providing meaningful error messages and proper error chaining.

use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A row could not be converted into a domain record
    #[error("Row conversion error: {0}")]
    RowConversion(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Creates a row conversion error for a specific entity and cause
    pub fn row_conversion(entity: &str, cause: impl std::fmt::Display) -> Self {
        DatabaseError::RowConversion(format!("{}: {}", entity, cause))
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Database(db_err) => {
                DatabaseError::QueryFailed(db_err.message().to_string())
            }
            other => DatabaseError::QueryFailed(other.to_string()),
        }
    }
}
