//! Keyword task planner.
//!
//! A project description is matched against a fixed set of template rules.
//! Every rule whose trigger words appear (as whole tokens) contributes its
//! task list; the union is de-duplicated in first-seen order and closed with a
//! deployment step. Descriptions that trigger nothing get the general template.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::tokens;

pub const FINAL_TASK: &str = "Final Review & Deployment";

/// One template: the words that trigger it and the tasks it contributes.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub tasks: &'static [&'static str],
}

/// Rules in the order their tasks are emitted.
pub const TEMPLATE_RULES: &[TemplateRule] = &[
    TemplateRule {
        name: "react",
        triggers: &["react", "frontend"],
        tasks: &[
            "Initialize Project (Vite/CRA)",
            "Setup React Router",
            "Design Component Structure",
            "Implement Global State (Redux/Context)",
            "Connect to API",
            "Responsive Styling",
        ],
    },
    TemplateRule {
        name: "node",
        triggers: &["node", "backend", "express"],
        tasks: &[
            "Setup Express Server",
            "Configure MongoDB Connection",
            "Design API Routes",
            "Implement Auth Middleware",
            "Create Controllers",
        ],
    },
    TemplateRule {
        name: "python",
        triggers: &["python", "django"],
        tasks: &[
            "Setup Virtual Env",
            "Install Dependencies",
            "Write Core Logic",
            "Unit Testing",
            "Optimize Performance",
        ],
    },
    TemplateRule {
        name: "machine learning",
        triggers: &["ml", "ai", "data"],
        tasks: &[
            "Data Collection",
            "Data Cleaning (EDA)",
            "Feature Engineering",
            "Train Model",
            "Evaluate Metrics",
            "Deployment",
        ],
    },
    TemplateRule {
        name: "mobile",
        triggers: &["app", "mobile"],
        tasks: &[
            "Setup Environment (Expo/Flutter)",
            "Design Screens",
            "Implement Navigation",
            "API Integration",
            "Test on Device",
        ],
    },
];

/// Used when no rule fires.
pub const GENERAL_TASKS: &[&str] = &[
    "Define Scope & MVP",
    "Initialize Git Repo",
    "Create Wireframes",
    "Develop Core Features",
    "Testing & Bug Fixes",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectPlan {
    pub tasks: Vec<String>,
}

/// Rules `description` triggers, in rule order.
fn fired_rules(description: &str) -> impl Iterator<Item = &'static TemplateRule> {
    let words: HashSet<String> = tokens(description).into_iter().collect();
    TEMPLATE_RULES
        .iter()
        .filter(move |rule| rule.triggers.iter().any(|t| words.contains(*t)))
}

pub fn plan_tasks(description: &str) -> ProjectPlan {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tasks: Vec<String> = Vec::new();
    for rule in fired_rules(description) {
        for task in rule.tasks {
            if seen.insert(*task) {
                tasks.push(task.to_string());
            }
        }
    }

    if tasks.is_empty() {
        tasks = GENERAL_TASKS.iter().map(|t| t.to_string()).collect();
    } else {
        tasks.push(FINAL_TASK.to_string());
    }

    ProjectPlan { tasks }
}
