//! Axum route handlers for project planning.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::planner::guides::{plan_guide, AiPlanResponse};
use crate::planner::templates::{plan_tasks, ProjectPlan};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlanProjectRequest {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct AiPlanRequest {
    #[serde(default)]
    pub task: String,
}

/// POST /plan-project
///
/// Returns `{tasks}` assembled from the keyword templates the description triggers.
pub async fn handle_plan_project(
    Json(request): Json<PlanProjectRequest>,
) -> Result<Json<ProjectPlan>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "Project description is required".to_string(),
        ));
    }

    let plan = plan_tasks(&request.description);
    info!("Planned {} tasks", plan.tasks.len());
    Ok(Json(plan))
}

/// POST /ai-plan
///
/// Classifies the task into a guide category and returns that guide.
/// 404 when the category has no guide.
pub async fn handle_ai_plan(
    State(state): State<AppState>,
    Json(request): Json<AiPlanRequest>,
) -> Result<Json<AiPlanResponse>, AppError> {
    plan_guide(
        state.models.classifier.as_ref(),
        &state.guides,
        &request.task,
    )
    .map(Json)
}
