//! Axum route handlers for mentor matching.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::matcher::{match_mentors, MatchSettings};
use crate::models::candidate::Candidate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// POST /match-mentors
///
/// Ranks the supplied mentor profiles against the query. Each result is the
/// submitted profile plus `matchScore` (0–100).
pub async fn handle_match_mentors(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Response, AppError> {
    let settings = MatchSettings {
        threshold: state.config.match_threshold,
        top_k: state.config.match_top_k,
    };

    let matches = match_mentors(
        state.models.embedder.as_deref(),
        &request.query,
        &request.candidates,
        &settings,
    )
    .await?;

    info!(
        "Matched {} of {} mentors",
        matches.len(),
        request.candidates.len()
    );
    Ok(Json(matches).into_response())
}
