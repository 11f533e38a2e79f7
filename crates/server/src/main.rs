// crates/server/src/main.rs
//! Focus-flow server binary.
//!
//! Opens (or creates) the SQLite database, wires up the model-completion
//! provider from the environment, and serves the API on localhost.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use focus_flow_core::llm::{CompletionProvider, LlmConfig, OpenAiProvider};
use focus_flow_db::Database;
use focus_flow_server::{create_app, AppState};

/// Default port for the server.
const DEFAULT_PORT: u16 = 8000;

/// Get the server port from environment or use default.
fn get_port() -> u16 {
    std::env::var("FOCUS_FLOW_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Get the database path from environment or use `focus.db` in the working
/// directory.
fn get_db_path() -> PathBuf {
    std::env::var("FOCUS_FLOW_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("focus.db"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let db = Database::new(&get_db_path()).await?;

    let llm_config = LlmConfig::from_env();
    let llm: Option<Arc<dyn CompletionProvider>> = match OpenAiProvider::from_config(&llm_config) {
        Some(provider) => {
            tracing::info!(model = %llm_config.model, "Model-completion provider configured");
            Some(Arc::new(provider))
        }
        None => {
            tracing::warn!(
                "OPENAI_API_KEY not configured; POST /api/breakdown will return 503"
            );
            None
        }
    };

    let state = AppState::new(Arc::new(db), llm);
    let app = create_app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], get_port()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Focus Flow API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
