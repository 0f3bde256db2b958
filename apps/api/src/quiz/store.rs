//! Question stores. The sampler only needs "N random questions for (skill, difficulty)".

use async_trait::async_trait;
use rand::seq::SliceRandom;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::question::{Difficulty, Question, QuestionRow};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid question record: {0}")]
    InvalidRecord(String),
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Up to `size` questions drawn uniformly at random, without replacement,
    /// whose skill equals `skill` ignoring case. Fewer are returned when fewer exist.
    async fn sample(
        &self,
        skill: &str,
        difficulty: Difficulty,
        size: usize,
    ) -> Result<Vec<Question>, StoreError>;

    fn name(&self) -> &str;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replaces the whole question table with `questions` in one transaction.
    pub async fn replace_all(&self, questions: &[Question]) -> Result<u64, StoreError> {
        for q in questions {
            q.validate().map_err(StoreError::InvalidRecord)?;
        }

        let mut tx = self.pool.begin().await?;
        let removed = sqlx::query("DELETE FROM questions")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        for q in questions {
            sqlx::query(
                r#"
                INSERT INTO questions (id, skill, question, options, correct_answer, difficulty)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&q.skill)
            .bind(&q.question)
            .bind(&q.options)
            .bind(q.correct_answer as i32)
            .bind(q.difficulty.as_str())
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        info!(
            "Replaced {removed} stored questions with {} new ones",
            questions.len()
        );
        Ok(questions.len() as u64)
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn sample(
        &self,
        skill: &str,
        difficulty: Difficulty,
        size: usize,
    ) -> Result<Vec<Question>, StoreError> {
        if size == 0 {
            return Ok(vec![]);
        }

        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, skill, question, options, correct_answer, difficulty, created_at
            FROM questions
            WHERE lower(skill) = lower($1) AND difficulty = $2
            ORDER BY random()
            LIMIT $3
            "#,
        )
        .bind(skill)
        .bind(difficulty.as_str())
        .bind(i64::try_from(size).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Question::try_from(row).map_err(StoreError::InvalidRecord))
            .collect()
    }

    fn name(&self) -> &str {
        "postgres"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Read-only question bank held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionStore {
    questions: Vec<Question>,
}

impl InMemoryQuestionStore {
    pub fn new(questions: Vec<Question>) -> Result<Self, StoreError> {
        for q in &questions {
            q.validate().map_err(StoreError::InvalidRecord)?;
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn sample(
        &self,
        skill: &str,
        difficulty: Difficulty,
        size: usize,
    ) -> Result<Vec<Question>, StoreError> {
        let skill = skill.to_lowercase();
        let pool: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| q.difficulty == difficulty && q.skill.to_lowercase() == skill)
            .collect();

        Ok(pool
            .choose_multiple(&mut rand::thread_rng(), size)
            .map(|q| (*q).clone())
            .collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn q(skill: &str, difficulty: Difficulty, text: &str) -> Question {
        Question {
            skill: skill.to_string(),
            question: text.to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: 0,
            difficulty,
        }
    }

    fn store() -> InMemoryQuestionStore {
        InMemoryQuestionStore::new(vec![
            q("React", Difficulty::Basic, "b1"),
            q("React", Difficulty::Basic, "b2"),
            q("React", Difficulty::Basic, "b3"),
            q("React", Difficulty::Advanced, "a1"),
            q("Python", Difficulty::Basic, "p1"),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_sample_filters_by_skill_case_insensitively() {
        let picked = store().sample("rEaCt", Difficulty::Basic, 10).await.unwrap();
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|q| q.skill == "React"));
    }

    #[tokio::test]
    async fn test_sample_is_without_replacement() {
        for _ in 0..20 {
            let picked = store().sample("React", Difficulty::Basic, 2).await.unwrap();
            let unique: HashSet<_> = picked.iter().map(|q| q.question.clone()).collect();
            assert_eq!(unique.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_sample_underfills_without_error() {
        let picked = store().sample("React", Difficulty::Advanced, 2).await.unwrap();
        assert_eq!(picked.len(), 1);
        let none = store().sample("React", Difficulty::Intermediate, 2).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_skill_match_is_exact_not_prefix() {
        let picked = store().sample("Reac", Difficulty::Basic, 5).await.unwrap();
        assert!(picked.is_empty());
    }

    #[test]
    fn test_in_memory_store_rejects_malformed_questions() {
        let mut bad = q("React", Difficulty::Basic, "bad");
        bad.options.pop();
        assert!(matches!(
            InMemoryQuestionStore::new(vec![bad]),
            Err(StoreError::InvalidRecord(_))
        ));
    }
}
