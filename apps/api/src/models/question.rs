use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Every multiple-choice question carries exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Difficulty::Basic),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// A question as held by the store, answer included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub skill: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub difficulty: Difficulty,
}

impl Question {
    /// Checks the shape every stored question must have.
    pub fn validate(&self) -> Result<(), String> {
        if self.options.len() != OPTION_COUNT {
            return Err(format!(
                "question '{}' has {} options, expected {OPTION_COUNT}",
                self.question,
                self.options.len()
            ));
        }
        if self.correct_answer >= OPTION_COUNT {
            return Err(format!(
                "question '{}' has answer index {} out of range",
                self.question, self.correct_answer
            ));
        }
        Ok(())
    }
}

/// A question as sent to a quiz taker. There is no answer field to leak.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl From<Question> for QuizQuestion {
    fn from(q: Question) -> Self {
        QuizQuestion {
            question: q.question,
            options: q.options,
            difficulty: Some(q.difficulty),
        }
    }
}

impl QuizQuestion {
    /// Stand-in shown when the store has nothing for a skill.
    pub fn placeholder(skill: &str) -> Self {
        QuizQuestion {
            question: format!("No questions found for {skill}. Please seed the database."),
            options: ["OK", "Cancel", "Retry", "Exit"]
                .into_iter()
                .map(String::from)
                .collect(),
            difficulty: None,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub skill: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = String;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let correct_answer = usize::try_from(row.correct_answer)
            .map_err(|_| format!("row {} has negative answer index", row.id))?;
        let question = Question {
            skill: row.skill,
            question: row.question,
            options: row.options,
            correct_answer,
            difficulty: row.difficulty.parse()?,
        };
        question.validate()?;
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(difficulty: &str, correct_answer: i32, options: usize) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            skill: "React".to_string(),
            question: "What is JSX?".to_string(),
            options: (0..options).map(|i| format!("option {i}")).collect(),
            correct_answer,
            difficulty: difficulty.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_difficulty_parses_and_displays() {
        assert_eq!("Intermediate".parse::<Difficulty>().unwrap(), Difficulty::Intermediate);
        assert_eq!(Difficulty::Advanced.to_string(), "advanced");
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_row_converts_to_question() {
        let q = Question::try_from(make_row("basic", 2, 4)).unwrap();
        assert_eq!(q.difficulty, Difficulty::Basic);
        assert_eq!(q.correct_answer, 2);
    }

    #[test]
    fn test_row_with_wrong_option_count_is_rejected() {
        assert!(Question::try_from(make_row("basic", 0, 3)).is_err());
    }

    #[test]
    fn test_row_with_bad_answer_index_is_rejected() {
        assert!(Question::try_from(make_row("basic", 4, 4)).is_err());
        assert!(Question::try_from(make_row("basic", -1, 4)).is_err());
    }

    #[test]
    fn test_quiz_question_has_no_answer_field() {
        let q = Question::try_from(make_row("advanced", 1, 4)).unwrap();
        let value = serde_json::to_value(QuizQuestion::from(q)).unwrap();
        assert!(value.get("correctAnswer").is_none());
        assert!(value.get("correct_answer").is_none());
        assert_eq!(value["difficulty"], "advanced");
    }

    #[test]
    fn test_placeholder_names_the_skill() {
        let q = QuizQuestion::placeholder("Rust");
        assert!(q.question.contains("Rust"));
        assert_eq!(q.options.len(), OPTION_COUNT);
        assert!(q.difficulty.is_none());
    }
}
