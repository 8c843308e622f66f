//! Server entrypoint for quizpanel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quizpanel_api::{AppState, create_router};
use quizpanel_application::{ResolveBatchUseCase, ResolveQuestionUseCase};
use quizpanel_infrastructure::{CatalogLoader, ConfigLoader, GroqGateway};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments for quizpanel
#[derive(Parser, Debug)]
#[command(name = "quizpanel")]
#[command(author, version, about = "Answer multiple-choice quiz images with a voting panel of LLMs")]
#[command(long_about = r#"
Quizpanel serves an HTTP API that answers a week's worth of quiz questions
rendered as images.

For each question it:
1. Extracts the question text from the image with a multimodal model
2. Asks a panel of independent text models to answer it in parallel
3. Aggregates their answers by majority vote

Configuration is loaded from ./quizpanel.toml (or --config <path>),
overridable via QUIZPANEL_* environment variables. The Groq API key comes
from GROQ_API_KEY or the [groq] config section.

Example:
  GROQ_API_KEY=gsk_... quizpanel --listen 0.0.0.0:8080
"#)]
struct Cli {
    /// Listen address, overriding the [server] config section
    #[arg(short, long, value_name = "ADDR")]
    listen: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the course catalog file, overriding the [catalog] section
    #[arg(long, value_name = "PATH")]
    courses: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting quizpanel");

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to load configuration")?;

    let Some(api_key) = config.groq.resolve_api_key() else {
        bail!("GROQ_API_KEY environment variable not set and no API key provided");
    };

    if config.models.panel.is_empty() {
        bail!("At least one panel model must be configured ([models] panel)");
    }

    // === Dependency Injection ===
    let gateway = Arc::new(
        GroqGateway::with_base_url(api_key, config.groq.base_url.as_str(), config.groq.timeout())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to build Groq gateway")?,
    );

    let catalog_path = cli.courses.unwrap_or_else(|| config.catalog.path.clone());
    let catalog = Arc::new(CatalogLoader::load_or_fallback(&catalog_path));

    let resolver = Arc::new(ResolveQuestionUseCase::new(
        gateway,
        config.models.extraction.clone(),
        config.models.panel.clone(),
    ));
    let batch = Arc::new(ResolveBatchUseCase::new(
        resolver,
        config.batch.locator_template.clone(),
        config.batch.question_count,
    ));

    let state = AppState::new(catalog, batch);
    let app = create_router().with_state(state);

    let addr = cli.listen.unwrap_or_else(|| config.server.listen_addr());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        addr = %addr,
        panel_size = config.models.panel.len(),
        questions = config.batch.question_count,
        "Listening"
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
