use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;
use crate::notes::NotesError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A required key or id is absent from settings. Raised before any network call.
    #[error("{0}")]
    ConfigurationMissing(String),

    /// An upstream API answered with a non-success status. Never retried.
    #[error("{service} API request failed: {status}")]
    RemoteCall { service: &'static str, status: u16 },

    #[error("No job detected")]
    NoJobDetected,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Notes error: {0}")]
    Notes(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, .. } => AppError::RemoteCall {
                service: "OpenRouter",
                status,
            },
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl From<NotesError> for AppError {
    fn from(err: NotesError) -> Self {
        match err {
            NotesError::Api { status, .. } => AppError::RemoteCall {
                service: "Notion",
                status,
            },
            other => AppError::Notes(other.to_string()),
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Fetch(msg) => AppError::Internal(anyhow::anyhow!(msg)),
            // Unsupported sites and unresolved fields both surface as "no job detected".
            _ => AppError::NoJobDetected,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ConfigurationMissing(msg) => (
                StatusCode::BAD_REQUEST,
                "CONFIGURATION_MISSING",
                msg.clone(),
            ),
            AppError::RemoteCall { service, status } => {
                tracing::warn!("{service} returned status {status}");
                (
                    StatusCode::BAD_GATEWAY,
                    "REMOTE_CALL_FAILED",
                    self.to_string(),
                )
            }
            AppError::NoJobDetected => (
                StatusCode::NOT_FOUND,
                "NO_JOB_DETECTED",
                "No job detected".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Notes(msg) => {
                tracing::error!("Notes error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOTES_ERROR",
                    "Saving to notes failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
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
