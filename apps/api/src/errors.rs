use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// An unsupported file extension is not an error of its own: it yields an
/// empty extraction, which the handler then reports as `EmptyContent`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume content provided")]
    NoContent,

    #[error("Empty or invalid resume content")]
    EmptyContent,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to extract text from {0} file: {1}")]
    Extraction(&'static str, String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NoContent | AppError::EmptyContent | AppError::Extraction(..) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
