use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, loaded model backends and servable guide categories.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillsync",
        "models": state.models.status(),
        "questionStore": state.questions.name(),
        "guides": state.guides.categories().collect::<Vec<_>>(),
    }))
}
