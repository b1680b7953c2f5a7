//! Application error type and HTTP status mapping.
//!
//! Every failure in a request path converges on [`AppError`], whose
//! [`IntoResponse`] impl maps it to a status code and a JSON error body.
//! No stack traces or credential material reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::ocr::OcrError;
use crate::youtube::YoutubeError;

/// Unified application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or invalid request parameter.
    #[error("{0}")]
    BadRequest(String),

    /// A resolved identifier has no corresponding upstream resource.
    #[error("{0}")]
    NotFound(String),

    /// A required credential is absent on a call path with no fallback.
    #[error("configuration error: {0}")]
    Config(String),

    /// A third-party call failed: non-success status or timeout. Mapped
    /// to 429 when the message carries quota/rate-limit phrasing.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Anything else.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Config(msg) => {
                tracing::error!("configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Upstream(msg) => {
                tracing::error!("upstream error: {msg}");
                let status = if is_quota_message(msg) {
                    StatusCode::TOO_MANY_REQUESTS
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                (status, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Convenience type alias.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}

/// Whether an upstream failure message indicates quota or rate-limit
/// exhaustion. YouTube quota failures carry `quotaExceeded` /
/// `rateLimitExceeded` reasons in the error body.
pub(crate) fn is_quota_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    lowered.contains("quota") || lowered.contains("rate limit") || lowered.contains("ratelimit")
}

impl From<YoutubeError> for AppError {
    fn from(e: YoutubeError) -> Self {
        match e {
            YoutubeError::MissingApiKey => AppError::Config(e.to_string()),
            YoutubeError::VideoNotFound => AppError::NotFound(e.to_string()),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl From<OcrError> for AppError {
    fn from(e: OcrError) -> Self {
        match e {
            OcrError::MissingApiKey => AppError::Config(e.to_string()),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl From<clipscout_search::SearchError> for AppError {
    fn from(e: clipscout_search::SearchError) -> Self {
        match e {
            clipscout_search::SearchError::Config(msg) => AppError::Internal(msg),
            other => AppError::Upstream(other.to_string()),
        }
    }
}
