//! NLP pipeline used by the resume extractor: person entities and sentence boundaries.

use std::collections::HashSet;

/// Words that start with a capital letter in resumes but never belong to a name.
const NON_NAME_WORDS: &[&str] = &[
    // section headings
    "resume", "curriculum", "vitae", "cv", "summary", "profile", "objective", "about",
    "experience", "education", "skills", "projects", "project", "contact", "email", "phone",
    "address", "references", "certifications", "languages", "interests", "achievements",
    "awards", "work", "professional", "technical", "personal", "details",
    // titles and roles
    "senior", "junior", "lead", "principal", "staff", "software", "engineer", "developer",
    "intern", "manager", "student", "designer", "analyst", "scientist", "architect",
    "consultant", "full", "stack", "frontend", "backend", "web", "mobile", "data",
    "machine", "learning", "deep", "cloud", "devops",
    // institutions and degrees
    "university", "college", "institute", "school", "academy", "bachelor", "master",
    "degree", "technology", "science", "sciences", "engineering", "computer",
    // months and dates
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec", "present", "current",
    // function words and links
    "i", "a", "an", "the", "and", "or", "of", "in", "at", "for", "with", "to", "on", "by",
    "my", "me", "as", "linkedin", "github", "portfolio",
];

/// Shortest and longest token runs accepted as a person name.
const NAME_TOKENS: std::ops::RangeInclusive<usize> = 2..=3;

/// Black-box language analysis the extractor depends on.
pub trait NlpPipeline: Send + Sync {
    /// Person entities in document order.
    fn person_names(&self, text: &str) -> Vec<String>;

    /// Sentences in document order, whitespace-collapsed.
    fn sentences(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &str;
}

/// Deterministic pipeline built from capitalisation and punctuation rules.
///
/// A person is a run of 2–3 capitalised alphabetic words on one line, none of
/// them a known non-name word, not broken by punctuation.
#[derive(Debug, Clone)]
pub struct RuleBasedPipeline {
    stopwords: HashSet<String>,
}

impl RuleBasedPipeline {
    pub fn new() -> Self {
        Self {
            stopwords: NON_NAME_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Adds extra non-name words (e.g. the skill vocabulary, so "Python React" is never a person).
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            for token in w.as_ref().split_whitespace() {
                self.stopwords.insert(token.to_lowercase());
            }
        }
        self
    }

    fn is_name_token(&self, word: &str) -> bool {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        first.is_uppercase()
            && word.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'')
            && !self.stopwords.contains(&word.to_lowercase())
    }
}

impl Default for RuleBasedPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl NlpPipeline for RuleBasedPipeline {
    fn person_names(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();

        for line in text.lines() {
            let mut run: Vec<&str> = Vec::new();

            for raw in line.split_whitespace() {
                let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
                let closes_run = raw
                    .chars()
                    .last()
                    .is_some_and(|c| matches!(c, ',' | '.' | ';' | ':' | '|' | ')' | '/'));

                if self.is_name_token(word) && !raw.starts_with('(') {
                    run.push(word);
                } else {
                    flush_run(&mut run, &mut names);
                    continue;
                }

                if closes_run {
                    flush_run(&mut run, &mut names);
                }
            }
            flush_run(&mut run, &mut names);
        }

        names
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();

        for paragraph in paragraphs(text) {
            let mut current = String::new();
            let mut chars = paragraph.chars().peekable();
            while let Some(c) = chars.next() {
                current.push(c);
                let at_boundary = chars.peek().map_or(true, |n| n.is_whitespace());
                if matches!(c, '.' | '!' | '?') && at_boundary {
                    push_sentence(&mut current, &mut out);
                }
            }
            push_sentence(&mut current, &mut out);
        }

        out
    }

    fn name(&self) -> &str {
        "rules"
    }
}

fn flush_run(run: &mut Vec<&str>, names: &mut Vec<String>) {
    if NAME_TOKENS.contains(&run.len()) {
        names.push(run.join(" "));
    }
    run.clear();
}

fn push_sentence(current: &mut String, out: &mut Vec<String>) {
    let sentence = crate::text::collapse_whitespace(current);
    if !sentence.is_empty() {
        out.push(sentence);
    }
    current.clear();
}

/// Groups lines into paragraphs separated by blank lines.
fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}
