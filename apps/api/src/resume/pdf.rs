use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// True for upload names ending in `.pdf`, any case.
pub fn is_pdf_filename(name: &str) -> bool {
    name.trim().to_ascii_lowercase().ends_with(".pdf")
}

/// Extracts plain text from an uploaded PDF.
///
/// Runs on the blocking pool. A parser error, a parser panic and a document with
/// no text layer all surface as `ExtractionFailed`.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let size = data.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::ExtractionFailed(format!("PDF text extraction aborted: {e}")))?
        .map_err(|e| AppError::ExtractionFailed(format!("Unable to extract text from PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::ExtractionFailed(
            "Unable to extract text from PDF".to_string(),
        ));
    }

    debug!("Extracted {} chars from {size}-byte PDF", text.len());
    Ok(text)
}
