use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::nlp::NlpPipeline;
use crate::text::{clip_chars, collapse_whitespace, contains_phrase, title_case, tokens};

/// Technical skills recognised in resume text. Multi-word terms match as phrases.
pub const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node.js",
    "express",
    "mongodb",
    "sql",
    "html",
    "css",
    "docker",
    "aws",
    "machine learning",
    "deep learning",
    "data science",
    "flask",
    "django",
    "git",
    "c++",
    "c#",
    "flutter",
    "figma",
];

pub const UNKNOWN_NAME: &str = "Unknown";
const ELLIPSIS: &str = "...";
const BIO_SENTENCES: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFields {
    pub full_name: String,
    pub skills: Vec<String>,
    pub bio: String,
}

#[derive(Debug, Clone)]
struct SkillTerm {
    tokens: Vec<String>,
    display: String,
}

/// Fails with `ModelUnavailable` when no NLP pipeline is loaded.
pub fn require_nlp(nlp: Option<&dyn NlpPipeline>) -> Result<&dyn NlpPipeline, AppError> {
    nlp.ok_or_else(|| AppError::ModelUnavailable("NLP pipeline is not loaded".to_string()))
}

/// Pulls name, skills and a short bio out of plain resume text.
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    vocabulary: Vec<SkillTerm>,
    bio_max_chars: usize,
}

impl ResumeExtractor {
    pub fn new(bio_max_chars: usize) -> Self {
        Self::with_vocabulary(DEFAULT_SKILL_VOCABULARY, bio_max_chars)
    }

    pub fn with_vocabulary<S: AsRef<str>>(terms: &[S], bio_max_chars: usize) -> Self {
        let vocabulary = terms
            .iter()
            .map(|t| SkillTerm {
                tokens: tokens(t.as_ref()),
                display: title_case(t.as_ref()),
            })
            .filter(|t| !t.tokens.is_empty())
            .collect();
        Self {
            vocabulary,
            bio_max_chars,
        }
    }

    /// Extracts all fields. Fails with `ModelUnavailable` when no NLP pipeline is loaded.
    pub fn extract(
        &self,
        nlp: Option<&dyn NlpPipeline>,
        text: &str,
    ) -> Result<ResumeFields, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Resume text cannot be empty".to_string()));
        }
        let nlp = require_nlp(nlp)?;

        let full_name = nlp
            .person_names(text)
            .into_iter()
            .find(|n| n.split_whitespace().count() >= 2)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let sentences = nlp.sentences(text);
        let bio = truncate_bio(
            &sentences
                .iter()
                .take(BIO_SENTENCES)
                .cloned()
                .collect::<Vec<_>>()
                .join(" "),
            self.bio_max_chars,
        );

        Ok(ResumeFields {
            full_name,
            skills: self.extract_skills(text),
            bio,
        })
    }

    /// Vocabulary skills present in `text` as whole tokens, title-cased, sorted, unique.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let haystack = tokens(text);
        self.vocabulary
            .iter()
            .filter(|term| contains_phrase(&haystack, &term.tokens))
            .map(|term| term.display.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Whitespace-collapsed `bio`, cut so that the result including the ellipsis
/// never exceeds `max_chars`.
pub fn truncate_bio(bio: &str, max_chars: usize) -> String {
    let bio = collapse_whitespace(bio);
    if bio.chars().count() <= max_chars {
        return bio;
    }
    if max_chars <= ELLIPSIS.len() {
        return clip_chars(&bio, max_chars).to_string();
    }
    let mut cut = clip_chars(&bio, max_chars - ELLIPSIS.len())
        .trim_end()
        .to_string();
    cut.push_str(ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::nlp::RuleBasedPipeline;

    const RESUME: &str = "John Smith\n\
        Software engineer with 5 years of experience building web platforms in Python, React, SQL. \
        Mentored a team of four and shipped a JavaScript design system used by 30 product teams. \
        Loves teaching.\n\n\
        Skills: Node.js, Docker, AWS, machine-learning, C++";

    fn pipeline() -> RuleBasedPipeline {
        RuleBasedPipeline::new().with_stopwords(DEFAULT_SKILL_VOCABULARY)
    }

    #[test]
    fn test_extracts_name_skills_and_bio() {
        let extractor = ResumeExtractor::new(200);
        let fields = extractor.extract(Some(&pipeline()), RESUME).unwrap();

        assert_eq!(fields.full_name, "John Smith");
        for skill in ["Python", "React", "Sql"] {
            assert!(fields.skills.contains(&skill.to_string()), "missing {skill}");
        }
        assert!(fields.bio.chars().count() <= 200);
        assert!(fields.bio.starts_with("John Smith Software engineer"));
    }

    #[test]
    fn test_whole_token_matching_avoids_java_in_javascript() {
        let extractor = ResumeExtractor::new(200);
        let skills = extractor.extract_skills(RESUME);
        assert!(skills.contains(&"Javascript".to_string()));
        assert!(!skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_skills_handle_punctuated_and_multi_word_terms() {
        let extractor = ResumeExtractor::new(200);
        let skills = extractor.extract_skills(RESUME);
        for skill in ["Node.js", "Docker", "Aws", "Machine Learning", "C++"] {
            assert!(skills.contains(&skill.to_string()), "missing {skill}");
        }
    }

    #[test]
    fn test_skills_are_unique_and_sorted() {
        let extractor = ResumeExtractor::new(200);
        let skills = extractor.extract_skills("python Python PYTHON, react");
        assert_eq!(skills, vec!["Python", "React"]);
    }

    #[test]
    fn test_unknown_name_when_no_person_found() {
        let extractor = ResumeExtractor::new(200);
        let fields = extractor
            .extract(Some(&pipeline()), "experienced developer. knows python.")
            .unwrap();
        assert_eq!(fields.full_name, UNKNOWN_NAME);
    }

    #[test]
    fn test_bio_uses_first_two_sentences() {
        let extractor = ResumeExtractor::new(500);
        let fields = extractor
            .extract(Some(&pipeline()), "One here. Two here. Three here.")
            .unwrap();
        assert_eq!(fields.bio, "One here. Two here.");
    }

    #[test]
    fn test_missing_pipeline_is_model_unavailable() {
        let extractor = ResumeExtractor::new(200);
        let err = extractor.extract(None, RESUME).unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable(_)));
    }

    #[test]
    fn test_blank_text_is_validation_error() {
        let extractor = ResumeExtractor::new(200);
        let err = extractor.extract(Some(&pipeline()), "  \n ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_truncate_bio_appends_ellipsis_within_budget() {
        let bio = truncate_bio(&"word ".repeat(100), 150);
        assert!(bio.ends_with("..."));
        assert!(bio.chars().count() <= 150);
    }

    #[test]
    fn test_truncate_bio_leaves_short_text_alone() {
        assert_eq!(truncate_bio("Short  bio.", 150), "Short bio.");
    }

    #[test]
    fn test_truncate_bio_tiny_budget_has_no_ellipsis() {
        assert_eq!(truncate_bio("abcdef", 2), "ab");
    }

    #[test]
    fn test_custom_vocabulary() {
        let extractor = ResumeExtractor::with_vocabulary(&["rust", "tokio"], 100);
        assert_eq!(extractor.extract_skills("Rust with Tokio and Python"), vec!["Rust", "Tokio"]);
    }
}
