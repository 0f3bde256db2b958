//! Task → category label classification for `/ai-plan`.

use crate::text::{contains_phrase, tokens};

/// Label returned when no category fits. It has no guide, so the lookup fails with `NotFound`.
pub const FALLBACK_CATEGORY: &str = "general";

/// Black-box text classifier. Labels are free-form; the guide catalog decides
/// which of them are servable.
pub trait CategoryClassifier: Send + Sync {
    fn classify(&self, task: &str) -> String;

    fn name(&self) -> &str;
}

const BUILTIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "mobile",
        &[
            "mobile", "android", "ios", "iphone", "flutter", "react native", "app store",
            "play store", "kotlin", "swift", "smartphone",
        ],
    ),
    (
        "video",
        &[
            "video", "videos", "editing", "edit", "youtube", "film", "films", "premiere",
            "after effects", "davinci", "vlog", "reel", "reels", "footage", "montage",
        ],
    ),
    (
        "web",
        &[
            "web", "website", "websites", "webapp", "frontend", "backend", "full stack",
            "fullstack", "html", "css", "javascript", "react", "node", "e-commerce",
            "ecommerce", "saas", "api", "portal", "dashboard", "blog",
        ],
    ),
    (
        "ml",
        &[
            "ml", "ai", "machine learning", "deep learning", "neural", "model", "predict",
            "prediction", "classifier", "classification", "dataset", "data science",
            "tensorflow", "pytorch", "nlp", "recommendation", "chatbot",
        ],
    ),
    (
        "design",
        &[
            "design", "designs", "ui", "ux", "figma", "logo", "branding", "graphic",
            "graphics", "poster", "illustration", "photoshop", "illustrator", "wireframe",
            "typography",
        ],
    ),
    (
        "business",
        &[
            "business", "startup", "company", "market", "marketing", "revenue", "sales",
            "finance", "investor", "investors", "pitch", "entrepreneur", "brand", "customers",
        ],
    ),
];

/// Scores every category by the number of its keywords present in the task
/// (whole tokens, multi-word keywords as phrases). Highest score wins; ties go
/// to the category listed first.
#[derive(Debug, Clone)]
pub struct KeywordCategoryClassifier {
    categories: Vec<(String, Vec<Vec<String>>)>,
}

impl KeywordCategoryClassifier {
    pub fn new<S: AsRef<str>>(categories: &[(S, &[&str])]) -> Self {
        let categories = categories
            .iter()
            .map(|(label, keywords)| {
                let phrases = keywords
                    .iter()
                    .map(|k| tokens(k))
                    .filter(|t| !t.is_empty())
                    .collect();
                (label.as_ref().to_string(), phrases)
            })
            .collect();
        Self { categories }
    }

    /// Keyword sets for the six built-in guide categories.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_KEYWORDS)
    }

    /// Per-category hit counts, in category order.
    pub fn scores(&self, task: &str) -> Vec<(&str, usize)> {
        let words = tokens(task);
        self.categories
            .iter()
            .map(|(label, phrases)| {
                let hits = phrases
                    .iter()
                    .filter(|p| contains_phrase(&words, p))
                    .count();
                (label.as_str(), hits)
            })
            .collect()
    }
}

impl CategoryClassifier for KeywordCategoryClassifier {
    fn classify(&self, task: &str) -> String {
        let mut best: Option<(&str, usize)> = None;
        for (label, hits) in self.scores(task) {
            if hits == 0 {
                continue;
            }
            match best {
                Some((_, top)) if top >= hits => {}
                _ => best = Some((label, hits)),
            }
        }
        best.map_or_else(|| FALLBACK_CATEGORY.to_string(), |(label, _)| label.to_string())
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obvious_tasks_land_in_their_category() {
        let c = KeywordCategoryClassifier::builtin();
        assert_eq!(c.classify("Build an Android app for the Play Store"), "mobile");
        assert_eq!(c.classify("Edit a YouTube video with transitions"), "video");
        assert_eq!(c.classify("Create an e-commerce website"), "web");
        assert_eq!(c.classify("Train a machine learning model to predict churn"), "ml");
        assert_eq!(c.classify("Design a logo in Figma"), "design");
        assert_eq!(c.classify("Launch a startup and pitch to investors"), "business");
    }

    #[test]
    fn test_unrelated_task_falls_back_to_general() {
        let c = KeywordCategoryClassifier::builtin();
        assert_eq!(c.classify("bake sourdough bread"), FALLBACK_CATEGORY);
        assert_eq!(c.classify(""), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_ties_go_to_earlier_category() {
        let c = KeywordCategoryClassifier::new(&[("first", &["alpha"][..]), ("second", &["beta"][..])]);
        assert_eq!(c.classify("beta alpha"), "first");
    }

    #[test]
    fn test_more_hits_beat_catalog_order() {
        let c = KeywordCategoryClassifier::new(&[
            ("first", &["alpha"][..]),
            ("second", &["beta", "gamma"][..]),
        ]);
        assert_eq!(c.classify("alpha beta gamma"), "second");
    }

    #[test]
    fn test_keywords_match_whole_tokens() {
        let c = KeywordCategoryClassifier::builtin();
        // "maintain" contains "ai", "guidelines" contains "ui"
        assert_eq!(c.classify("maintain guidelines"), FALLBACK_CATEGORY);
    }
}
