//! Centralized error handling.
//!
//! Every failure surfaces as an [`AppError`], which renders to a fixed
//! HTTP status and a `{ code, message, details }` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::errors::ErrorKind;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("The given email and password do not match")]
    InvalidCredentials,

    // Resource errors
    #[error("{message}")]
    NotFound {
        message: String,
        details: Option<Value>,
    },

    // Validation
    #[error("{message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
    details: Value,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) | AppError::InvalidCredentials | AppError::Jwt(_) => {
                "UNAUTHORIZED"
            }
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Validation { .. } => "VALIDATION_FAILED",
            AppError::Database(_) | AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) | AppError::InvalidCredentials | AppError::Jwt(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Jwt(e) => match e.kind() {
                ErrorKind::ExpiredSignature => "The token has expired".to_string(),
                _ => {
                    tracing::warn!("JWT rejected: {:?}", e);
                    "Invalid authentication token".to_string()
                }
            },
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    fn details(&self) -> Value {
        match self {
            AppError::NotFound { details, .. } | AppError::Validation { details, .. } => {
                details.clone().unwrap_or_else(|| json!({}))
            }
            _ => json!({}),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: self.code(),
            message: self.user_message(),
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound {
            message: msg.into(),
            details: None,
        }
    }

    /// Not found for an entity looked up by id; the id is echoed in `details`.
    pub fn not_found_id(msg: impl Into<String>, id: i32) -> Self {
        AppError::NotFound {
            message: msg.into(),
            details: Some(json!({ "id": id })),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation {
            message: msg.into(),
            details: None,
        }
    }

    pub fn validation_with(msg: impl Into<String>, details: Value) -> Self {
        AppError::Validation {
            message: msg.into(),
            details: Some(details),
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        AppError::Forbidden(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
