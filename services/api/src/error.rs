//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed input, rejected before any store access
    #[error("{0}")]
    Validation(String),

    /// Login with a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No matching row
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation on insert
    #[error("{0}")]
    Conflict(String),

    /// Internal password hashing failure
    #[error("Password hashing failed")]
    Hashing,

    /// Internal server error
    #[error("Internal server error")]
    Internal,

    /// Database error
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Hashing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Password hashing failed".to_string(),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Database(DatabaseError::UniqueViolation(detail)) => {
                tracing::error!("unique constraint violation: {}", detail);
                (StatusCode::CONFLICT, "Resource already exists".to_string())
            }
            ApiError::Database(DatabaseError::ForeignKeyViolation(detail)) => {
                tracing::error!("foreign key constraint violation: {}", detail);
                (
                    StatusCode::CONFLICT,
                    "Row is referenced by other records".to_string(),
                )
            }
            ApiError::Database(err) => {
                // Diagnostic detail stays server-side
                tracing::error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        let response =
            ApiError::Validation("quantity must be non-negative".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_map_to_400() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("Food item not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let response = ApiError::Conflict("already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_errors_map_to_500() {
        let err = DatabaseError::Configuration("internal detail".to_string());
        let response = ApiError::Database(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unique_violation_maps_to_409() {
        let err = DatabaseError::UniqueViolation("users.email".to_string());
        let response = ApiError::Database(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
