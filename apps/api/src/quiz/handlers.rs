//! Axum route handlers for quizzes.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::question::QuizQuestion;
use crate::quiz::sampler::sample_quiz;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub skill: String,
}

/// POST /quiz
///
/// Returns a stratified quiz for `skill`. When the store holds nothing for the
/// skill, a single placeholder question is returned instead of an empty list.
pub async fn handle_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<Vec<QuizQuestion>>, AppError> {
    let skill = request.skill.trim();

    let quiz = sample_quiz(
        state.questions.as_ref(),
        skill,
        &state.config.quiz_curve,
        state.config.quiz_shuffle,
    )
    .await?;

    if quiz.is_empty() {
        warn!("No questions stored for '{skill}', returning placeholder");
        return Ok(Json(vec![QuizQuestion::placeholder(skill)]));
    }

    info!("Built {}-question quiz for '{skill}'", quiz.len());
    Ok(Json(quiz))
}
