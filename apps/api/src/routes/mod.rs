pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::planner::handlers as planner;
use crate::quiz::handlers as quiz;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Upload cap for `/parse-resume`.
pub const RESUME_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Mentors
        .route("/match-mentors", post(matching::handle_match_mentors))
        // Quizzes
        .route("/quiz", post(quiz::handle_quiz))
        // Resumes
        .route(
            "/parse-resume",
            post(resume::handle_parse_resume).layer(DefaultBodyLimit::max(RESUME_UPLOAD_LIMIT)),
        )
        .route(
            "/parse-resume-text",
            post(resume::handle_parse_resume_text),
        )
        // Planning
        .route("/plan-project", post(planner::handle_plan_project))
        .route("/ai-plan", post(planner::handle_ai_plan))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::backends::ModelRegistry;
    use crate::config::{Config, EmbeddingBackend, NlpBackend};
    use crate::quiz::bank::builtin_questions;
    use crate::quiz::store::InMemoryQuestionStore;

    fn app_with(config: Config) -> Router {
        let models = ModelRegistry::load(&config);
        let store = InMemoryQuestionStore::new(builtin_questions()).unwrap();
        build_router(AppState::new(config, models, Arc::new(store)))
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn multipart(field: &str, filename: &str, content: &[u8]) -> Request<Body> {
        let boundary = "skillsync-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/parse-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_models() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["models"]["embedding"], "hash");
        assert_eq!(body["models"]["nlp"], "rules");
        assert_eq!(body["questionStore"], "memory");
        assert_eq!(
            body["guides"],
            json!(["mobile", "video", "web", "ml", "design", "business"])
        );
    }

    #[tokio::test]
    async fn test_quiz_for_seeded_skill() {
        let (status, body) = post_json(app(), "/quiz", json!({ "skill": "React" })).await;
        assert_eq!(status, StatusCode::OK);
        let quiz = body.as_array().unwrap();
        assert_eq!(quiz.len(), 5);
        assert!(quiz.iter().all(|q| q.get("correctAnswer").is_none()));
    }

    #[tokio::test]
    async fn test_quiz_for_unknown_skill_returns_placeholder() {
        let (status, body) = post_json(app(), "/quiz", json!({ "skill": "Cobol" })).await;
        assert_eq!(status, StatusCode::OK);
        let quiz = body.as_array().unwrap();
        assert_eq!(quiz.len(), 1);
        assert_eq!(
            quiz[0]["question"],
            "No questions found for Cobol. Please seed the database."
        );
    }

    #[tokio::test]
    async fn test_quiz_without_skill_is_bad_request() {
        let (status, body) = post_json(app(), "/quiz", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_mentors_echoes_profiles_with_scores() {
        let body = json!({
            "query": "react frontend mentor",
            "candidates": [
                { "_id": "a1", "fullName": "Asha Rao", "bio": "react frontend mentor", "skillsKnown": ["React"] },
                { "_id": "b2", "fullName": "Ben Cole", "bio": "welding and carpentry", "skillsKnown": [] }
            ]
        });
        let (status, body) = post_json(app(), "/match-mentors", body).await;
        assert_eq!(status, StatusCode::OK);
        let matches = body.as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["_id"], "a1");
        assert_eq!(matches[0]["fullName"], "Asha Rao");
        assert!(matches[0]["matchScore"].as_f64().unwrap() > 15.0);
    }

    #[tokio::test]
    async fn test_match_mentors_without_embedder_is_empty() {
        let config = Config {
            embedding_backend: EmbeddingBackend::Disabled,
            ..Config::default()
        };
        let body = json!({
            "query": "react",
            "candidates": [{ "fullName": "Asha Rao", "bio": "react" }]
        });
        let (status, body) = post_json(app_with(config), "/match-mentors", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_parse_resume_text() {
        let text = "Jane Doe\nFull stack developer working with Python and React. Mentors juniors.";
        let (status, body) = post_json(app(), "/parse-resume-text", json!({ "text": text })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fullName"], "Jane Doe");
        assert_eq!(body["skills"], json!(["Python", "React"]));
        assert!(body["bio"].as_str().unwrap().starts_with("Jane Doe Full stack"));
    }

    #[tokio::test]
    async fn test_parse_resume_text_without_nlp_is_unavailable() {
        let config = Config {
            nlp_backend: NlpBackend::Disabled,
            ..Config::default()
        };
        let (status, body) =
            post_json(app_with(config), "/parse-resume-text", json!({ "text": "Jane Doe" })).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "MODEL_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_non_pdf() {
        let (status, body) = send(app(), multipart("resume", "cv.docx", b"hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Only PDF files are supported");
    }

    #[tokio::test]
    async fn test_parse_resume_requires_resume_field() {
        let (status, body) = send(app(), multipart("file", "cv.pdf", b"%PDF")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No resume uploaded");
    }

    #[tokio::test]
    async fn test_parse_resume_without_nlp_skips_pdf_extraction() {
        let config = Config {
            nlp_backend: NlpBackend::Disabled,
            ..Config::default()
        };
        let (status, body) =
            send(app_with(config), multipart("resume", "cv.pdf", b"not a pdf")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "MODEL_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_parse_resume_with_unreadable_pdf() {
        let (status, body) = send(app(), multipart("resume", "cv.PDF", b"not a pdf")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_plan_project() {
        let (status, body) =
            post_json(app(), "/plan-project", json!({ "description": "React app" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tasks"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_ai_plan_known_and_unknown_categories() {
        let (status, body) =
            post_json(app(), "/ai-plan", json!({ "task": "Edit a YouTube video" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["detectedCategory"], "video");
        assert_eq!(body["projectTitle"], "Professional Video Editing");

        let (status, body) =
            post_json(app(), "/ai-plan", json!({ "task": "bake sourdough bread" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No guide available for this task");
    }
}
