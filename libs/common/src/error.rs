//! Custom error types for the common library
//!
//! This module defines the database error type returned by the repository
//! layer, with constraint violations split out so callers can map them to
//! the right HTTP status.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// A uniqueness constraint was violated (duplicate key)
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated (row still referenced)
    #[error("Foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Classify a query error, separating constraint violations from
    /// generic query failures.
    pub fn from_query(err: SqlxError) -> Self {
        if let SqlxError::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return DatabaseError::UniqueViolation(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return DatabaseError::ForeignKeyViolation(db_err.message().to_string());
            }
        }
        DatabaseError::Query(err)
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
