//! POST /api/v1/analyze — multipart resume upload.
//!
//! All request-shape validation lives here; the analysis core only ever sees
//! raw bytes and never learns about multipart, filenames, or status codes.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

/// The multipart field the client must use for the uploaded file.
const RESUME_FIELD: &str = "resume";

pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() == Some(RESUME_FIELD) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data));
        }
    }

    let (filename, data) = upload.ok_or_else(|| {
        AppError::Validation("No file part named 'resume' in the request.".to_string())
    })?;

    if filename.is_empty() {
        return Err(AppError::Validation("No file selected.".to_string()));
    }
    if !has_pdf_extension(&filename) {
        return Err(AppError::Validation(
            "Only PDF files are supported.".to_string(),
        ));
    }

    // PDF parsing is CPU-bound sync work; keep it off the async workers.
    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task panicked: {e}")))??;

    info!(
        domain = %result.domain,
        skills = result.skills.len(),
        "analyzed resume '{filename}'"
    );

    Ok(Json(result))
}

/// Case-insensitive check on the extension after the last dot.
fn has_pdf_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_accepted() {
        assert!(has_pdf_extension("resume.pdf"));
        assert!(has_pdf_extension("resume.PDF"));
        assert!(has_pdf_extension("my.latest.resume.pdf"));
    }

    #[test]
    fn test_non_pdf_extension_rejected() {
        assert!(!has_pdf_extension("resume.docx"));
        assert!(!has_pdf_extension("resume.pdf.exe"));
        assert!(!has_pdf_extension("resume"));
        assert!(!has_pdf_extension(""));
    }
}
