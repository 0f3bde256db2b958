use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillsync::backends::ModelRegistry;
use skillsync::config::Config;
use skillsync::db::question_store;
use skillsync::routes::build_router;
use skillsync::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillSync service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Matching threshold {} (top {}), quiz curve {}",
        config.match_threshold, config.match_top_k, config.quiz_curve
    );

    // Load model backends once; shared read-only by every request
    let models = ModelRegistry::load(&config);

    // Question store: Postgres when configured, built-in bank otherwise
    let questions = question_store(&config).await?;
    info!("Question store: {}", questions.name());

    let state = AppState::new(config.clone(), models, questions);
    info!(
        "Guide categories: {}",
        state.guides.categories().collect::<Vec<_>>().join(", ")
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
