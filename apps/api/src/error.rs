//! # API Error Types
//!
//! The one error type every handler returns.
//!
//! ## Error Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                              ApiError        HTTP               │
//! │  ──────────────────────────────────  ──────────────  ────────────────  │
//! │  StoreError::NotFound                NotFound        404               │
//! │  CoreError::ProductNotInCart         NotFound        404               │
//! │  StoreError::Duplicate               Conflict        409               │
//! │  ValidationError / other CoreError   InvalidInput    400               │
//! │  JSON body rejection                 InvalidInput    400               │
//! │  Bad credentials                     Unauthorized    401               │
//! │  Hashing / blocking task failure     Internal        500               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Responses carry `{"code": "NOT_FOUND", "message": "..."}`. Internal
//! details are logged, never sent.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use tienda_core::{CoreError, ValidationError};
use tienda_store::StoreError;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Machine-readable error code sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    Conflict,
    InvalidInput,
    Unauthorized,
    Internal,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::NotFound(_) => ErrorCode::NotFound,
            ApiError::Conflict(_) => ErrorCode::Conflict,
            ApiError::InvalidInput(_) => ErrorCode::InvalidInput,
            ApiError::Unauthorized(_) => ErrorCode::Unauthorized,
            ApiError::Internal(_) => ErrorCode::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::Internal(_) => {
                tracing::error!(error = %self, "Request error");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            code: self.code(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::Duplicate { .. } => ApiError::Conflict(err.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotInCart(_) => ApiError::NotFound(err.to_string()),
            CoreError::Validation(inner) => inner.into(),
            CoreError::CartTooLarge { .. }
            | CoreError::QuantityTooLarge { .. }
            | CoreError::TotalOverflow => ApiError::InvalidInput(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

/// Result type alias for handlers and services.
pub type ApiResult<T> = Result<T, ApiError>;
