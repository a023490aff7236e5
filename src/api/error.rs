use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;

pub const FORBIDDEN_MESSAGE: &str = "Forbidden - Admins only";

#[derive(Debug)]
pub enum ApiError {
    Forbidden(String),

    ValidationError(String),

    NotFound(String),

    /// Persistence failure. `message` names the failed action, `detail` is
    /// the underlying error and is returned to the caller for diagnosis.
    StoreError { message: String, detail: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::StoreError { message, detail } => write!(f, "{}: {}", message, detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::new(msg)),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new(msg)),
            ApiError::StoreError { message, detail } => {
                tracing::error!(error = %detail, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::with_detail(message, detail),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ApiError {
    pub fn forbidden() -> Self {
        ApiError::Forbidden(FORBIDDEN_MESSAGE.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn store(detail: impl Into<String>) -> Self {
        ApiError::StoreError {
            message: "Store operation failed".to_string(),
            detail: detail.into(),
        }
    }

    /// Names the action that failed. Only store errors carry it; client
    /// errors keep their own message.
    #[must_use]
    pub fn with_action(self, action: &str) -> Self {
        match self {
            ApiError::StoreError { detail, .. } => ApiError::StoreError {
                message: action.to_string(),
                detail,
            },
            other => other,
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StoreError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
