//! fbs-api - Feedback System backend service
//!
//! Accepts customer star-ratings and reviews, augments each submission
//! with AI-generated content, and serves the stored records back through
//! list and analytics endpoints.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fbs_api::llm::GeminiClient;
use fbs_api::{build_router, AppState};
use fbs_common::config::{self, FbsConfig, GeminiConfig, TomlConfig};

/// Feedback System backend service
#[derive(Debug, Parser)]
#[command(name = "fbs-api", version)]
struct Args {
    /// SQLite database path (overrides FBS_DATABASE_PATH and fbs.toml)
    #[arg(long)]
    database_path: Option<String>,

    /// HTTP bind address (overrides FBS_BIND_ADDR and fbs.toml)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting fbs-api (Feedback System backend)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve configuration (CLI -> env -> TOML -> default)
    let toml_config = TomlConfig::load();
    let config = FbsConfig {
        bind_addr: config::resolve_bind_addr(args.bind.as_deref(), &toml_config),
        database_path: config::resolve_database_path(args.database_path.as_deref(), &toml_config),
        gemini: GeminiConfig {
            api_key: config::resolve_gemini_api_key(&toml_config)?,
            model: config::resolve_gemini_model(&toml_config),
        },
    };
    info!("Database: {}", config.database_path.display());
    info!("Generation model: {}", config.gemini.model);

    // Open or create database
    let db_pool = fbs_common::db::init_database(&config.database_path).await?;
    info!("Database connection established");

    // Create application state with the Gemini generation backend
    let generator = Arc::new(GeminiClient::new(&config.gemini));
    let state = AppState::new(db_pool, generator);

    // Build router and start server
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
