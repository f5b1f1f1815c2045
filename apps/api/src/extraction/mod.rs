//! PDF text extraction for uploaded résumés.
//!
//! Mirrors the checks a browser client runs before calling `/api/critique`:
//! PDF only, at most 10 MiB, and enough text to be worth roasting.

pub mod handlers;

use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;

pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;
pub const MIN_TEXT_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedResume {
    pub filename: String,
    pub text: String,
    pub characters: usize,
}

/// True if the declared content type mentions PDF or the bytes carry the `%PDF-` magic.
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("pdf") || head.starts_with(b"%PDF-")
}

pub async fn extract_resume_text(
    filename: String,
    content_type: Option<&str>,
    bytes: Bytes,
) -> Result<ExtractedResume, AppError> {
    if !is_pdf(content_type, &bytes) {
        return Err(AppError::UnsupportedFile(
            "Please upload a PDF file! 📄".to_string(),
        ));
    }
    if bytes.len() > MAX_PDF_BYTES {
        return Err(AppError::FileTooLarge(
            "File too large! Please upload a PDF smaller than 10MB. 📏".to_string(),
        ));
    }

    // pdf-extract is CPU-bound and can panic on malformed input
    let raw = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::Unprocessable(
                    "Failed to parse PDF. Please ensure it's a valid PDF file with extractable text."
                        .to_string(),
                )
            } else {
                AppError::Internal(anyhow::Error::new(e))
            }
        })?
        .map_err(|e| AppError::Unprocessable(format!("Failed to parse PDF: {e}")))?;

    finish_extraction(filename, &raw)
}

/// Trims extracted text and rejects documents that are mostly images.
pub fn finish_extraction(filename: String, raw: &str) -> Result<ExtractedResume, AppError> {
    let text = raw.trim();
    let characters = text.chars().count();
    if characters < MIN_TEXT_CHARS {
        return Err(AppError::Unprocessable(
            "This PDF seems to have very little text. \
             Please ensure it's a text-based resume and not just images."
                .to_string(),
        ));
    }

    tracing::debug!("Extracted {characters} characters from {filename}");
    Ok(ExtractedResume {
        filename,
        text: text.to_string(),
        characters,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal one-page PDF: Helvetica text, one line per entry, hand-built xref.
    /// Lines must not contain `(`, `)` or `\`.
    pub(crate) fn one_page_pdf(lines: &[&str]) -> Vec<u8> {
        let mut content = String::from("BT\n/F1 11 Tf\n14 TL\n36 750 Td\n");
        for line in lines {
            content.push_str(&format!("({line}) Tj T*\n"));
        }
        content.push_str("ET");

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
             /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_at = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }

    pub(crate) const RESUME_LINES: &[&str] = &[
        "Jane Doe - Senior Rust Engineer",
        "Built a low-latency order router handling 40k requests per second",
        "Cut p99 latency by 35 percent by replacing a global mutex with sharded state",
        "Skills: Rust, Tokio, Axum, PostgreSQL, Kubernetes",
    ];

    #[test]
    fn test_is_pdf_by_content_type() {
        assert!(is_pdf(Some("application/pdf"), b""));
        assert!(is_pdf(Some("Application/PDF"), b""));
        assert!(!is_pdf(Some("image/png"), b"\x89PNG"));
    }

    #[test]
    fn test_is_pdf_by_magic_bytes() {
        assert!(is_pdf(None, b"%PDF-1.7\n..."));
        assert!(is_pdf(Some("application/octet-stream"), b"%PDF-1.4"));
        assert!(!is_pdf(None, b"PK\x03\x04"));
    }

    #[tokio::test]
    async fn test_rejects_non_pdf() {
        let err = extract_resume_text(
            "cv.docx".to_string(),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            Bytes::from_static(b"PK\x03\x04"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFile(_)));
    }

    #[tokio::test]
    async fn test_rejects_oversized_pdf() {
        let mut body = b"%PDF-1.4\n".to_vec();
        body.resize(MAX_PDF_BYTES + 1, b' ');
        let err = extract_resume_text(
            "huge.pdf".to_string(),
            Some("application/pdf"),
            Bytes::from(body),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge(_)));
    }

    #[tokio::test]
    async fn test_rejects_unparseable_pdf() {
        let err = extract_resume_text(
            "broken.pdf".to_string(),
            Some("application/pdf"),
            Bytes::from_static(b"%PDF-1.4\nthis is not really a pdf"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[tokio::test]
    async fn test_extracts_text_from_valid_pdf() {
        let extracted = extract_resume_text(
            "jane.pdf".to_string(),
            Some("application/pdf"),
            Bytes::from(one_page_pdf(RESUME_LINES)),
        )
        .await
        .unwrap();
        assert_eq!(extracted.filename, "jane.pdf");
        assert!(extracted.text.contains("Rust"), "Text was {:?}", extracted.text);
        assert!(extracted.text.contains("Kubernetes"));
        assert!(extracted.characters >= MIN_TEXT_CHARS);
        assert_eq!(extracted.characters, extracted.text.chars().count());
    }

    #[tokio::test]
    async fn test_valid_pdf_with_too_little_text_is_rejected() {
        let err = extract_resume_text(
            "scan.pdf".to_string(),
            None,
            Bytes::from(one_page_pdf(&["Jane Doe"])),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[test]
    fn test_short_text_is_rejected() {
        let err = finish_extraction("scan.pdf".to_string(), "   Jane Doe   \n").unwrap_err();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[test]
    fn test_text_is_trimmed_and_counted() {
        let body = "é".repeat(120);
        let raw = format!("\n\n{body}  \n");
        let extracted = finish_extraction("cv.pdf".to_string(), &raw).unwrap();
        assert_eq!(extracted.text, body);
        assert_eq!(extracted.characters, 120);
        assert_eq!(extracted.filename, "cv.pdf");
    }
}
