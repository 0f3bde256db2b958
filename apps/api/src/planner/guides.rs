//! Static project guides keyed by category label, and the `/ai-plan` lookup.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::planner::classifier::CategoryClassifier;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectGuide {
    pub category: String,
    pub title: String,
    pub overview: String,
    pub steps: Vec<String>,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
}

/// Response body of `/ai-plan`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiPlanResponse {
    pub detected_category: String,
    pub project_title: String,
    pub overview: String,
    pub step_by_step_guide: Vec<String>,
    pub skills_required: Vec<String>,
    pub tools_required: Vec<String>,
}

impl From<&ProjectGuide> for AiPlanResponse {
    fn from(guide: &ProjectGuide) -> Self {
        AiPlanResponse {
            detected_category: guide.category.clone(),
            project_title: guide.title.clone(),
            overview: guide.overview.clone(),
            step_by_step_guide: guide.steps.clone(),
            skills_required: guide.skills.clone(),
            tools_required: guide.tools.clone(),
        }
    }
}

type GuideEntry = (
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

const BUILTIN_GUIDES: &[GuideEntry] = &[
    (
        "mobile",
        "Mobile Application Development",
        "Build a real-world mobile app used by thousands of users.",
        &[
            "Understand the problem and target users",
            "Choose platform (Android / iOS / Cross-platform)",
            "Design UI using Figma",
            "Set up development environment (Flutter / React Native)",
            "Implement app screens and navigation",
            "Connect backend APIs",
            "Test on real devices",
            "Deploy to Play Store / App Store",
        ],
        &["Flutter / React Native", "UI Design", "APIs", "Testing"],
        &["Android Studio", "VS Code", "Firebase", "Figma"],
    ),
    (
        "video",
        "Professional Video Editing",
        "Create high-quality videos for YouTube, Instagram, or films.",
        &[
            "Understand video storytelling",
            "Learn basic cuts and transitions",
            "Color correction and grading",
            "Add music and sound effects",
            "Advanced effects and motion graphics",
            "Export optimized formats",
        ],
        &["Editing", "Color Grading", "Storytelling"],
        &["Adobe Premiere Pro", "After Effects", "DaVinci Resolve"],
    ),
    (
        "web",
        "Full Stack Web Development",
        "Build scalable web applications like e-commerce or SaaS platforms.",
        &[
            "Requirement analysis",
            "Design UI/UX",
            "Frontend development",
            "Backend API development",
            "Database integration",
            "Authentication & security",
            "Testing & deployment",
        ],
        &["HTML", "CSS", "JavaScript", "Backend"],
        &["React", "Node.js", "MongoDB", "Docker"],
    ),
    (
        "ml",
        "Machine Learning Project",
        "Develop intelligent systems that learn from data.",
        &[
            "Define problem statement",
            "Collect & clean data",
            "Exploratory Data Analysis",
            "Model training",
            "Evaluation",
            "Optimization",
            "Deployment",
        ],
        &["Python", "ML Algorithms", "Math"],
        &["Python", "Scikit-learn", "TensorFlow"],
    ),
    (
        "design",
        "UI / Graphic Design",
        "Create visually appealing and user-friendly designs.",
        &[
            "Understand design principles",
            "Learn typography and colors",
            "Create wireframes",
            "Design high-fidelity UI",
            "User feedback and iteration",
        ],
        &["Creativity", "UI/UX", "Branding"],
        &["Figma", "Photoshop", "Illustrator"],
    ),
    (
        "business",
        "Startup / Business Project",
        "Build and grow a real-world business idea.",
        &[
            "Problem validation",
            "Market research",
            "Business model creation",
            "Product development",
            "Marketing strategy",
            "Revenue generation",
        ],
        &["Marketing", "Finance", "Leadership"],
        &["Excel", "Notion", "Google Analytics"],
    ),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Category label → guide. Lookup is exact on the label.
#[derive(Debug, Clone, Default)]
pub struct GuideCatalog {
    guides: Vec<ProjectGuide>,
}

impl GuideCatalog {
    pub fn builtin() -> Self {
        let guides = BUILTIN_GUIDES
            .iter()
            .map(|(category, title, overview, steps, skills, tools)| ProjectGuide {
                category: category.to_string(),
                title: title.to_string(),
                overview: overview.to_string(),
                steps: owned(steps),
                skills: owned(skills),
                tools: owned(tools),
            })
            .collect();
        Self { guides }
    }

    pub fn get(&self, category: &str) -> Option<&ProjectGuide> {
        self.guides.iter().find(|g| g.category == category)
    }

    /// Category labels in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.guides.iter().map(|g| g.category.as_str())
    }
}

/// Classifies `task` and returns the matching guide, or `NotFound` when the
/// predicted label has no guide.
pub fn plan_guide(
    classifier: &dyn CategoryClassifier,
    catalog: &GuideCatalog,
    task: &str,
) -> Result<AiPlanResponse, AppError> {
    let task = task.trim();
    if task.is_empty() {
        return Err(AppError::Validation(
            "Task description is required".to_string(),
        ));
    }

    let label = classifier.classify(task);
    debug!("Classifier '{}' labelled task as '{label}'", classifier.name());

    let guide = catalog
        .get(&label)
        .ok_or_else(|| AppError::NotFound("No guide available for this task".to_string()))?;

    info!("Serving '{}' guide", guide.category);
    Ok(AiPlanResponse::from(guide))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLabel(&'static str);

    impl CategoryClassifier for FixedLabel {
        fn classify(&self, _task: &str) -> String {
            self.0.to_string()
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_builtin_catalog_has_six_guides() {
        let catalog = GuideCatalog::builtin();
        assert_eq!(catalog.categories().count(), 6);
        assert_eq!(
            catalog.categories().collect::<Vec<_>>(),
            vec!["mobile", "video", "web", "ml", "design", "business"]
        );
    }

    #[test]
    fn test_known_label_returns_full_guide() {
        let catalog = GuideCatalog::builtin();
        let plan = plan_guide(&FixedLabel("web"), &catalog, "an online store").unwrap();
        assert_eq!(plan.detected_category, "web");
        assert_eq!(plan.project_title, "Full Stack Web Development");
        assert_eq!(plan.step_by_step_guide.len(), 7);
        assert!(plan.tools_required.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_unknown_label_is_not_found() {
        let catalog = GuideCatalog::builtin();
        let err = plan_guide(&FixedLabel("gardening"), &catalog, "grow tomatoes").unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "No guide available for this task"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_task_is_rejected() {
        let catalog = GuideCatalog::builtin();
        let err = plan_guide(&FixedLabel("web"), &catalog, "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_response_uses_camel_case_keys() {
        let catalog = GuideCatalog::builtin();
        let plan = plan_guide(&FixedLabel("ml"), &catalog, "predict churn").unwrap();
        let value = serde_json::to_value(plan).unwrap();
        for key in [
            "detectedCategory",
            "projectTitle",
            "overview",
            "stepByStepGuide",
            "skillsRequired",
            "toolsRequired",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
