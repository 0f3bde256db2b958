//! Mentor matcher: ranks candidate profiles by semantic similarity to a query.
//!
//! Algorithm:
//! 1. Embed the query and every candidate (`name bio skills`) in one batch.
//! 2. Cosine similarity between the query vector and each candidate vector.
//! 3. Score = similarity × 100, rounded to one decimal. Candidates at or below
//!    the threshold are noise and dropped.
//! 4. Stable sort by score descending (ties keep request order), cap at top-k.

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::matching::embedder::Embedder;
use crate::models::candidate::{Candidate, MentorMatch};

#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    /// Exclusive cosine floor.
    pub threshold: f64,
    pub top_k: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            top_k: 10,
        }
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let (dot, na, nb) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(d, aa, bb), (x, y)| {
            (d + x * y, aa + x * x, bb + y * y)
        });

    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        dot / (na.sqrt() * nb.sqrt())
    }
}

/// Ranks pre-computed candidate vectors against the query vector.
///
/// `candidate_vecs[i]` must belong to `candidates[i]`.
pub fn rank_candidates<'a>(
    query_vec: &[f32],
    candidate_vecs: &[Vec<f32>],
    candidates: &'a [Candidate],
    settings: &MatchSettings,
) -> Vec<MentorMatch<'a>> {
    // compared on the same one-decimal scale as the score
    let floor = (settings.threshold * 1000.0).round() / 10.0;

    let mut matches: Vec<MentorMatch<'a>> = candidates
        .iter()
        .zip(candidate_vecs)
        .enumerate()
        .filter_map(|(position, (candidate, vec))| {
            let similarity = cosine_similarity(query_vec, vec) as f64;
            let match_score = ((similarity * 1000.0).round() / 10.0).min(100.0);
            (similarity > settings.threshold && match_score > floor).then_some(MentorMatch {
                candidate,
                match_score,
                position,
            })
        })
        .collect();

    // sort_by is stable, so equal scores keep request order
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(settings.top_k);
    matches
}

/// Matches `candidates` against `query`.
///
/// Returns an empty list when no embedding backend is loaded; the caller sees
/// "no matches" rather than an error.
pub async fn match_mentors<'a>(
    embedder: Option<&dyn Embedder>,
    query: &str,
    candidates: &'a [Candidate],
    settings: &MatchSettings,
) -> Result<Vec<MentorMatch<'a>>, AppError> {
    if query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let Some(embedder) = embedder else {
        warn!("Mentor matching requested but no embedding backend is loaded");
        return Ok(vec![]);
    };

    if candidates.is_empty() {
        return Ok(vec![]);
    }

    let mut texts = Vec::with_capacity(candidates.len() + 1);
    texts.push(query.to_string());
    texts.extend(candidates.iter().map(Candidate::embedding_text));

    let vectors = embedder.embed(&texts).await?;
    let Some((query_vec, candidate_vecs)) = vectors.split_first() else {
        return Err(AppError::Embedding(
            "embedding backend returned no vectors".to_string(),
        ));
    };

    let matches = rank_candidates(query_vec, candidate_vecs, candidates, settings);
    debug!(
        "Matched {} of {} candidates via {}",
        matches.len(),
        candidates.len(),
        embedder.name()
    );
    Ok(matches)
}
