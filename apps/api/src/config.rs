use std::str::FromStr;

use anyhow::{Context, Result};

use crate::quiz::sampler::StratificationCurve;

/// Which embedding backend the mentor matcher should load at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingBackend {
    Ollama,
    Hash,
    Disabled,
}

impl FromStr for EmbeddingBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(EmbeddingBackend::Ollama),
            "hash" => Ok(EmbeddingBackend::Hash),
            "none" | "disabled" => Ok(EmbeddingBackend::Disabled),
            other => anyhow::bail!("unknown EMBEDDING_BACKEND '{other}' (expected ollama, hash or none)"),
        }
    }
}

/// Which NLP pipeline the resume extractor should load at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NlpBackend {
    Rules,
    Disabled,
}

impl FromStr for NlpBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" => Ok(NlpBackend::Rules),
            "none" | "disabled" => Ok(NlpBackend::Disabled),
            other => anyhow::bail!("unknown NLP_BACKEND '{other}' (expected rules or none)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Postgres question store. When unset the built-in question bank is served from memory.
    pub database_url: Option<String>,
    pub embedding_backend: EmbeddingBackend,
    pub embedding_url: Option<String>,
    pub embedding_model: String,
    pub nlp_backend: NlpBackend,
    pub match_threshold: f64,
    pub match_top_k: usize,
    pub bio_max_chars: usize,
    pub resume_max_chars: usize,
    pub quiz_curve: StratificationCurve,
    pub quiz_shuffle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5008,
            rust_log: "info".to_string(),
            database_url: None,
            embedding_backend: EmbeddingBackend::Hash,
            embedding_url: None,
            embedding_model: "all-minilm".to_string(),
            nlp_backend: NlpBackend::Rules,
            match_threshold: 0.15,
            match_top_k: 10,
            bio_max_chars: 200,
            resume_max_chars: 5000,
            quiz_curve: StratificationCurve::default(),
            quiz_shuffle: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            database_url: optional_env("DATABASE_URL"),
            embedding_backend: parse_env("EMBEDDING_BACKEND", defaults.embedding_backend)?,
            embedding_url: optional_env("EMBEDDING_URL"),
            embedding_model: optional_env("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
            nlp_backend: parse_env("NLP_BACKEND", defaults.nlp_backend)?,
            match_threshold: parse_env("MATCH_THRESHOLD", defaults.match_threshold)?,
            match_top_k: parse_env("MATCH_TOP_K", defaults.match_top_k)?,
            bio_max_chars: parse_env("BIO_MAX_CHARS", defaults.bio_max_chars)?,
            resume_max_chars: parse_env("RESUME_MAX_CHARS", defaults.resume_max_chars)?,
            quiz_curve: parse_env("QUIZ_CURVE", defaults.quiz_curve)?,
            quiz_shuffle: parse_env("QUIZ_SHUFFLE", defaults.quiz_shuffle)?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
