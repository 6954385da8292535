use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// HTTP-facing error taxonomy. Storage detail never reaches the client;
/// it is logged and replaced with a generic 500 body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bookmark_not_found() -> Self {
        Self::NotFound("Bookmark doesn't exist".to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::Validation(msg),
            ServiceError::NotFound(_) => Self::bookmark_not_found(),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Field-specific message as plain text, naming the offending field.
            Self::Validation(msg) => {
                error!(message = %msg, "request validation failed");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": {"message": msg}})),
            )
                .into_response(),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"error": "Unauthorized request"})),
            )
                .into_response(),
            Self::Internal(detail) => {
                error!(error = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": {"message": "Internal server error"}})),
                )
                    .into_response()
            }
        }
    }
}
