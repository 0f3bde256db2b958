use std::sync::Arc;

use crate::backends::ModelRegistry;
use crate::config::Config;
use crate::planner::guides::GuideCatalog;
use crate::quiz::store::QuestionStore;
use crate::resume::extractor::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Embedding, NLP and classification backends, loaded once at startup.
    pub models: ModelRegistry,
    /// Postgres when `DATABASE_URL` is set, otherwise the built-in bank in memory.
    pub questions: Arc<dyn QuestionStore>,
    pub guides: Arc<GuideCatalog>,
    pub resume_extractor: Arc<ResumeExtractor>,
}

impl AppState {
    pub fn new(config: Config, models: ModelRegistry, questions: Arc<dyn QuestionStore>) -> Self {
        let resume_extractor = Arc::new(ResumeExtractor::new(config.bio_max_chars));
        Self {
            config,
            models,
            questions,
            guides: Arc::new(GuideCatalog::builtin()),
            resume_extractor,
        }
    }
}
