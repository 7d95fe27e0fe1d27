//! Error handling module for the news board backend.
//!
//! Provides the centralized error taxonomy with its fixed mapping to HTTP
//! status codes and `{"msg": ...}` response bodies. The `From<sqlx::Error>`
//! impl is the storage adapter: it translates SQLite extended result codes
//! into taxonomy variants so raw engine codes never leak past this module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

// SQLite extended result codes recognized by the storage adapter.
mod sqlite_codes {
    pub const CONSTRAINT_PRIMARYKEY: &str = "1555";
    pub const CONSTRAINT_UNIQUE: &str = "2067";
    pub const CONSTRAINT_NOTNULL: &str = "1299";
}

/// Application error taxonomy. Evaluated as a fixed status/message mapping;
/// every failure is terminal per-request, no retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Missing entity, empty fetch-by-id result, or unknown route.
    NotFound,
    /// A value that must be an integer was not (query param, path id, body).
    InvalidInteger,
    /// A required column was missing from an insert.
    NotNullViolation,
    /// Malformed or unrecognized request body.
    InvalidInput,
    /// Unique constraint violated (e.g. duplicate topic slug).
    UniqueViolation,
    /// Route matched but the verb is not registered.
    MethodNotAllowed,
    /// Catch-all for unclassified storage or server failures.
    Internal,
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInteger => StatusCode::BAD_REQUEST,
            AppError::NotNullViolation => StatusCode::BAD_REQUEST,
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::UniqueViolation => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message. These strings are part of the API
    /// contract and must not change.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::NotFound => "error page not found",
            AppError::InvalidInteger => "invalid input syntax for type integer",
            AppError::NotNullViolation => "violates not null violation",
            AppError::InvalidInput => "invalid input",
            AppError::UniqueViolation => "duplicate key value violates unique constraint",
            AppError::MethodNotAllowed => "method not allowed",
            AppError::Internal => "server error",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some(sqlite_codes::CONSTRAINT_PRIMARYKEY)
                | Some(sqlite_codes::CONSTRAINT_UNIQUE) => return AppError::UniqueViolation,
                Some(sqlite_codes::CONSTRAINT_NOTNULL) => return AppError::NotNullViolation,
                _ => {}
            }
        }
        tracing::error!("Database error: {:?}", err);
        AppError::Internal
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "msg": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::InvalidInteger.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotNullViolation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::UniqueViolation.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(AppError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(AppError::NotFound.message(), "error page not found");
        assert_eq!(
            AppError::UniqueViolation.message(),
            "duplicate key value violates unique constraint"
        );
        assert_eq!(
            AppError::InvalidInteger.message(),
            "invalid input syntax for type integer"
        );
        assert_eq!(AppError::Internal.message(), "server error");
    }
}
