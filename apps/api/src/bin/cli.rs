use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use skillsync::backends::ModelRegistry;
use skillsync::config::Config;
use skillsync::db::{create_pool, question_store};
use skillsync::errors::AppError;
use skillsync::matching::matcher::{match_mentors, MatchSettings};
use skillsync::models::candidate::Candidate;
use skillsync::models::question::QuizQuestion;
use skillsync::planner::guides::{plan_guide, GuideCatalog};
use skillsync::planner::templates::plan_tasks;
use skillsync::quiz::bank::builtin_questions;
use skillsync::quiz::sampler::sample_quiz;
use skillsync::quiz::store::PgQuestionStore;
use skillsync::resume::extractor::{require_nlp, ResumeExtractor};
use skillsync::resume::pdf::extract_pdf_text;
use skillsync::text::clip_chars;

#[derive(Debug, Parser)]
#[command(name = "skillsync-cli")]
#[command(about = "Run SkillSync operations from the command line; prints JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Stratified quiz for a skill
    Quiz { skill: String },
    /// Rank mentors (JSON array of profiles) against a query
    Match { query: String, candidates: String },
    /// Extract name, skills and bio from resume text or a PDF
    ParseResume {
        #[arg(long, conflicts_with = "text")]
        pdf: Option<PathBuf>,
        text: Vec<String>,
    },
    /// Keyword task plan for a project description
    PlanProject { text: Vec<String> },
    /// Categorised step-by-step guide for a task
    AiPlan { text: Vec<String> },
    /// Replace the stored questions with the built-in bank (needs DATABASE_URL)
    Seed,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command).await {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = e
                .downcast_ref::<AppError>()
                .map(AppError::code)
                .unwrap_or("CLI_ERROR");
            println!("{}", json!({ "error": format!("{e:#}"), "code": code }));
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<Value> {
    let config = Config::from_env()?;

    match command {
        Commands::Quiz { skill } => {
            let store = question_store(&config).await?;
            let mut quiz = sample_quiz(
                store.as_ref(),
                &skill,
                &config.quiz_curve,
                config.quiz_shuffle,
            )
            .await?;
            if quiz.is_empty() {
                quiz.push(QuizQuestion::placeholder(skill.trim()));
            }
            Ok(serde_json::to_value(quiz)?)
        }
        Commands::Match { query, candidates } => {
            let candidates: Vec<Candidate> =
                serde_json::from_str(&candidates).context("parse candidates json")?;
            let models = ModelRegistry::load(&config);
            let settings = MatchSettings {
                threshold: config.match_threshold,
                top_k: config.match_top_k,
            };
            let matches =
                match_mentors(models.embedder.as_deref(), &query, &candidates, &settings).await?;
            Ok(serde_json::to_value(matches)?)
        }
        Commands::ParseResume { pdf, text } => {
            let models = ModelRegistry::load(&config);
            let nlp = require_nlp(models.nlp.as_deref())?;
            let text = match pdf {
                Some(path) => {
                    let data = tokio::fs::read(&path)
                        .await
                        .with_context(|| format!("open {}", path.display()))?;
                    extract_pdf_text(Bytes::from(data)).await?
                }
                None => text.join(" "),
            };
            let fields = ResumeExtractor::new(config.bio_max_chars).extract(
                Some(nlp),
                clip_chars(&text, config.resume_max_chars),
            )?;
            Ok(serde_json::to_value(fields)?)
        }
        Commands::PlanProject { text } => {
            let description = text.join(" ");
            if description.trim().is_empty() {
                return Err(
                    AppError::Validation("Project description is required".to_string()).into(),
                );
            }
            Ok(serde_json::to_value(plan_tasks(&description))?)
        }
        Commands::AiPlan { text } => {
            let models = ModelRegistry::load(&config);
            let plan = plan_guide(
                models.classifier.as_ref(),
                &GuideCatalog::builtin(),
                &text.join(" "),
            )?;
            Ok(serde_json::to_value(plan)?)
        }
        Commands::Seed => {
            let url = config
                .database_url
                .as_deref()
                .context("seed requires DATABASE_URL")?;
            let store = PgQuestionStore::new(create_pool(url).await?);
            let seeded = store
                .replace_all(&builtin_questions())
                .await
                .map_err(AppError::from)?;
            Ok(json!({ "seeded": seeded }))
        }
    }
}
