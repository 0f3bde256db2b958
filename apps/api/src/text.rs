//! Shared text normalisation for keyword and vocabulary matching.
//!
//! Lowercases, keeps alphanumerics plus `+` and `#` (so `c++` and `c#` survive),
//! and turns every other character into a token break. Matching is always on
//! whole tokens, so `java` never matches inside `javascript`.

/// Lowercased tokens of `text`, split on anything that is not alphanumeric, `+` or `#`.
pub fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// True if the consecutive `phrase` tokens appear in `haystack`.
pub fn contains_phrase(haystack: &[String], phrase: &[String]) -> bool {
    if phrase.is_empty() || phrase.len() > haystack.len() {
        return false;
    }
    haystack.windows(phrase.len()).any(|w| w == phrase)
}

/// Uppercases the first character of every whitespace-separated word.
pub fn title_case(term: &str) -> String {
    term.split_whitespace()
        .map(|w| {
            let mut c = w.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().to_string() + c.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `text`, cut on a char boundary.
pub fn clip_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
