//! Application error type shared by every handler.
//!
//! Store failures are logged in full but surface to callers as a generic
//! message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid credential. The request never reaches a handler.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Authenticated identity does not match the requested identity.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The operation collides with existing state (duplicate application).
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation: {0}")]
    Validation(String),

    /// Any store failure. The message stays server-side.
    #[error("database: {0}")]
    Database(String),

    /// Non-store failure the caller can do nothing about. The message
    /// stays server-side.
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound("record not found".to_string()),
            other => Self::Database(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Database(detail) => {
                tracing::error!("❌ DB error: {detail}");
                "Database error".to_string()
            }
            Self::Internal(detail) => {
                tracing::error!("❌ internal error: {detail}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::unauthenticated("no cookie").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::forbidden("wrong user").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::conflict("duplicate").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::validation("bad input").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn other_sqlx_errors_map_to_database() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
