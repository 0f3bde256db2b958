//! Axum route handlers for resume parsing.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::extractor::{require_nlp, ResumeFields};
use crate::resume::pdf::{extract_pdf_text, is_pdf_filename};
use crate::state::AppState;
use crate::text::clip_chars;

/// Multipart field carrying the uploaded file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct ParseResumeTextRequest {
    #[serde(default)]
    pub text: String,
}

/// POST /parse-resume
///
/// Accepts a multipart upload with a `resume` PDF, extracts its text and
/// returns `{fullName, skills, bio}`.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeFields>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No resume uploaded".to_string()))?;

    if !is_pdf_filename(&filename) {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }
    require_nlp(state.models.nlp.as_deref())?;

    let text = extract_pdf_text(data).await?;
    info!("Parsing uploaded resume '{filename}'");

    parse_text(&state, &text).map(Json)
}

/// POST /parse-resume-text
///
/// Same extraction for callers that already hold the resume text.
pub async fn handle_parse_resume_text(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeTextRequest>,
) -> Result<Json<ResumeFields>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text is required".to_string()));
    }

    parse_text(&state, &request.text).map(Json)
}

fn parse_text(state: &AppState, text: &str) -> Result<ResumeFields, AppError> {
    let text = clip_chars(text, state.config.resume_max_chars);
    state
        .resume_extractor
        .extract(state.models.nlp.as_deref(), text)
}
