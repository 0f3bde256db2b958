use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::quiz::bank::builtin_questions;
use crate::quiz::store::{InMemoryQuestionStore, PgQuestionStore, QuestionStore};

/// Creates a PostgreSQL connection pool and applies pending migrations.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Question store selected by config: Postgres when `DATABASE_URL` is set,
/// otherwise the built-in bank held in memory.
pub async fn question_store(config: &Config) -> Result<Arc<dyn QuestionStore>> {
    match config.database_url.as_deref() {
        Some(url) => {
            let pool = create_pool(url).await?;
            Ok(Arc::new(PgQuestionStore::new(pool)))
        }
        None => {
            let store = InMemoryQuestionStore::new(builtin_questions())
                .context("Built-in question bank is malformed")?;
            info!(
                "DATABASE_URL not set; serving {} built-in questions from memory",
                store.len()
            );
            Ok(Arc::new(store))
        }
    }
}
