//! Stratified quiz sampler.
//!
//! Draws a fixed quota per difficulty tier (the stratification curve), in curve
//! order, and strips answers. A tier with too few questions contributes what it
//! has; nothing is borrowed from other tiers.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use tracing::debug;

use crate::errors::AppError;
use crate::models::question::{Difficulty, QuizQuestion};
use crate::quiz::store::QuestionStore;

/// Largest quota a single tier may request.
pub const MAX_TIER_COUNT: usize = 50;

/// Ordered tier → quota pairs. Each tier appears at most once and asks for at least one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StratificationCurve {
    tiers: Vec<(Difficulty, usize)>,
}

impl StratificationCurve {
    pub fn new(tiers: Vec<(Difficulty, usize)>) -> Result<Self, String> {
        if tiers.is_empty() {
            return Err("stratification curve needs at least one tier".to_string());
        }
        for (i, (difficulty, count)) in tiers.iter().enumerate() {
            if *count == 0 {
                return Err(format!("tier '{difficulty}' must request at least one question"));
            }
            if *count > MAX_TIER_COUNT {
                return Err(format!(
                    "tier '{difficulty}' requests {count} questions, at most {MAX_TIER_COUNT} allowed"
                ));
            }
            if tiers[..i].iter().any(|(d, _)| d == difficulty) {
                return Err(format!("tier '{difficulty}' appears more than once"));
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[(Difficulty, usize)] {
        &self.tiers
    }

    /// Quiz length when every tier is fully stocked.
    pub fn total(&self) -> usize {
        self.tiers
            .iter()
            .fold(0usize, |acc, (_, n)| acc.saturating_add(*n))
    }
}

impl Default for StratificationCurve {
    /// 2 basic, 2 intermediate, 1 advanced.
    fn default() -> Self {
        Self {
            tiers: vec![
                (Difficulty::Basic, 2),
                (Difficulty::Intermediate, 2),
                (Difficulty::Advanced, 1),
            ],
        }
    }
}

impl FromStr for StratificationCurve {
    type Err = String;

    /// Parses `basic:2,intermediate:2,advanced:1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiers = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| {
                let (difficulty, count) = part
                    .split_once(':')
                    .ok_or_else(|| format!("expected '<difficulty>:<count>', got '{}'", part.trim()))?;
                let count = count
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| format!("bad count in '{}': {e}", part.trim()))?;
                Ok((difficulty.parse::<Difficulty>()?, count))
            })
            .collect::<Result<Vec<_>, String>>()?;
        Self::new(tiers)
    }
}

impl fmt::Display for StratificationCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .tiers
            .iter()
            .map(|(d, n)| format!("{d}:{n}"))
            .collect();
        f.write_str(&parts.join(","))
    }
}

/// Builds a quiz for `skill`. Empty when the store has nothing; the caller
/// decides how to present that.
pub async fn sample_quiz(
    store: &dyn QuestionStore,
    skill: &str,
    curve: &StratificationCurve,
    shuffle: bool,
) -> Result<Vec<QuizQuestion>, AppError> {
    let skill = skill.trim();
    if skill.is_empty() {
        return Err(AppError::Validation("skill is required".to_string()));
    }

    let mut quiz: Vec<QuizQuestion> = Vec::new();
    for &(difficulty, count) in curve.tiers() {
        let drawn = store.sample(skill, difficulty, count).await?;
        debug!(
            "Tier {difficulty}: wanted {count}, drew {} for '{skill}' from {}",
            drawn.len(),
            store.name()
        );
        quiz.extend(drawn.into_iter().take(count).map(QuizQuestion::from));
    }

    if shuffle {
        quiz.shuffle(&mut rand::thread_rng());
    }

    Ok(quiz)
}
