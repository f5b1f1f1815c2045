//! Axum route handlers for the Critique API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};

use crate::critique::models::{CritiqueRequest, CritiqueResponse};
use crate::errors::AppError;
use crate::extraction::handlers::read_pdf_part;
use crate::extraction::extract_resume_text;
use crate::state::AppState;

/// POST /api/critique
///
/// Roasts already-extracted résumé text. Malformed JSON is reported as a 400
/// in the same `{ "error": ... }` shape as a failed validation.
pub async fn handle_critique(
    State(state): State<AppState>,
    payload: Result<Json<CritiqueRequest>, JsonRejection>,
) -> Result<Json<CritiqueResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let response = state.critique.submit(&request).await?;
    Ok(Json(response))
}

/// POST /api/critique/upload
///
/// Multipart `file` part → PDF text extraction → critique, in one round trip.
pub async fn handle_critique_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CritiqueResponse>, AppError> {
    let upload = read_pdf_part(multipart).await?;
    let extracted =
        extract_resume_text(upload.filename, upload.content_type.as_deref(), upload.bytes).await?;

    let request = CritiqueRequest {
        resume_text: extracted.text,
        filename: extracted.filename,
    };
    let response = state.critique.submit(&request).await?;
    Ok(Json(response))
}
