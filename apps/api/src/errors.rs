use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Message shown to the user whenever the model call fails, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate critique. \
    The AI is probably laughing too hard at your resume to respond properly. 😂";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Critique generation failed: {0}")]
    CritiqueGenerationFailed(#[from] LlmError),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("File too large: {0}")]
    FileTooLarge(String),

    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFile(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::FileTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::CritiqueGenerationFailed(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::InvalidRequest(msg)
            | AppError::UnsupportedFile(msg)
            | AppError::FileTooLarge(msg)
            | AppError::Unprocessable(msg) => msg.clone(),
            AppError::CritiqueGenerationFailed(e) => {
                tracing::error!("Error generating critique: {e}");
                GENERATION_FAILED_MESSAGE.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
