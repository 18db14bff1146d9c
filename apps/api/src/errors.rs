use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::application::SessionError;
use crate::jobs::FeedError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Feed(#[from] FeedError),

    /// No listing is loaded and the last refresh failed with this message.
    #[error("{0}")]
    FeedUnavailable(String),

    #[error("{0}")]
    Session(#[from] SessionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Feed(e) => {
                tracing::warn!("Feed error: {e}");
                let status = match e {
                    FeedError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, "FEED_ERROR", e.to_string())
            }
            AppError::FeedUnavailable(msg) => {
                (StatusCode::BAD_GATEWAY, "FEED_ERROR", msg.clone())
            }
            AppError::Session(e) => (StatusCode::CONFLICT, "SESSION_LOCKED", e.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
