//! Model registry: the embedding, NLP and classification backends, built once
//! at startup and shared read-only by every request.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{Config, EmbeddingBackend, NlpBackend};
use crate::matching::embedder::{Embedder, HashEmbedder, OllamaEmbedder, HASH_EMBEDDING_DIM};
use crate::planner::classifier::{CategoryClassifier, KeywordCategoryClassifier};
use crate::resume::extractor::DEFAULT_SKILL_VOCABULARY;
use crate::resume::nlp::{NlpPipeline, RuleBasedPipeline};

/// Loaded backends. A `None` backend means the dependent operation degrades
/// (matching returns no results, resume parsing reports the model as unavailable).
#[derive(Clone)]
pub struct ModelRegistry {
    pub embedder: Option<Arc<dyn Embedder>>,
    pub nlp: Option<Arc<dyn NlpPipeline>>,
    pub classifier: Arc<dyn CategoryClassifier>,
}

/// Backend names reported by `/health`; `null` when not loaded.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelStatus {
    pub embedding: Option<String>,
    pub nlp: Option<String>,
    pub classifier: String,
}

impl ModelRegistry {
    /// Builds every backend named in `config`. A backend that fails to build
    /// is logged and left unloaded; startup continues.
    pub fn load(config: &Config) -> Self {
        let embedder = load_embedder(config);
        let nlp = load_nlp(config);
        let classifier: Arc<dyn CategoryClassifier> = Arc::new(KeywordCategoryClassifier::builtin());

        let registry = Self {
            embedder,
            nlp,
            classifier,
        };
        let status = registry.status();
        info!(
            "Models loaded (embedding: {}, nlp: {}, classifier: {})",
            status.embedding.as_deref().unwrap_or("none"),
            status.nlp.as_deref().unwrap_or("none"),
            status.classifier
        );
        registry
    }

    pub fn status(&self) -> ModelStatus {
        ModelStatus {
            embedding: self.embedder.as_ref().map(|e| e.name().to_string()),
            nlp: self.nlp.as_ref().map(|n| n.name().to_string()),
            classifier: self.classifier.name().to_string(),
        }
    }
}

fn load_embedder(config: &Config) -> Option<Arc<dyn Embedder>> {
    match config.embedding_backend {
        EmbeddingBackend::Hash => Some(Arc::new(HashEmbedder::new(HASH_EMBEDDING_DIM))),
        EmbeddingBackend::Ollama => {
            let Some(url) = config.embedding_url.as_deref() else {
                warn!("EMBEDDING_BACKEND=ollama but EMBEDDING_URL is unset; mentor matching disabled");
                return None;
            };
            match OllamaEmbedder::new(url, config.embedding_model.clone()) {
                Ok(embedder) => {
                    info!(
                        "Ollama embedder configured at {url} (model: {})",
                        config.embedding_model
                    );
                    Some(Arc::new(embedder))
                }
                Err(e) => {
                    warn!("Failed to build Ollama embedder: {e}; mentor matching disabled");
                    None
                }
            }
        }
        EmbeddingBackend::Disabled => {
            warn!("Embedding backend disabled; mentor matching will return no results");
            None
        }
    }
}

fn load_nlp(config: &Config) -> Option<Arc<dyn NlpPipeline>> {
    match config.nlp_backend {
        NlpBackend::Rules => Some(Arc::new(
            RuleBasedPipeline::new().with_stopwords(DEFAULT_SKILL_VOCABULARY),
        )),
        NlpBackend::Disabled => {
            warn!("NLP backend disabled; resume parsing will report the model as unavailable");
            None
        }
    }
}
