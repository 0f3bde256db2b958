use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A mentor profile supplied by the calling backend.
///
/// Fields the matcher does not understand (`_id`, `avatar`, ...) are kept in
/// `extra` and echoed back untouched. A `matchScore` left over from an earlier
/// ranking is read into `previous_match_score` and never written back out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills_known: Vec<String>,
    #[serde(rename = "matchScore", default, skip_serializing)]
    pub previous_match_score: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate {
    /// Text handed to the embedding backend: name, bio and skills, space-joined.
    pub fn embedding_text(&self) -> String {
        format!(
            "{} {} {}",
            self.full_name,
            self.bio.as_deref().unwrap_or(""),
            self.skills_known.join(" ")
        )
    }
}

/// A ranked candidate. Borrows the submitted profile instead of mutating it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorMatch<'a> {
    #[serde(flatten)]
    pub candidate: &'a Candidate,
    /// Cosine similarity rescaled to 0–100, one decimal.
    pub match_score: f64,
    /// Index of the candidate in the request.
    #[serde(skip)]
    pub position: usize,
}
