use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::extraction::{extract_resume_text, ExtractedResume};

/// Name of the multipart part carrying the PDF.
const FILE_FIELD: &str = "file";

pub struct PdfUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Reads the first `file` part of a multipart body. Other parts are ignored.
pub async fn read_pdf_part(mut multipart: Multipart) -> Result<PdfUpload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(String::from);
        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(PdfUpload {
            filename,
            content_type,
            bytes,
        });
    }

    Err(AppError::InvalidRequest(format!(
        "A PDF must be uploaded in the `{FILE_FIELD}` field"
    )))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge(
            "File too large! Please upload a PDF smaller than 10MB. 📏".to_string(),
        )
    } else {
        AppError::InvalidRequest(e.body_text())
    }
}

/// POST /api/extract
///
/// Returns the text the critique endpoint would receive for this PDF.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractedResume>, AppError> {
    let upload = read_pdf_part(multipart).await?;
    let extracted =
        extract_resume_text(upload.filename, upload.content_type.as_deref(), upload.bytes).await?;
    Ok(Json(extracted))
}
