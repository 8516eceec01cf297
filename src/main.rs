use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use expressable_ai::catalog::{EnhancementType, TargetLanguage};
use expressable_ai::config::Config;
use expressable_ai::gemini::GeminiClient;
use expressable_ai::server::{app, AppState};
use expressable_ai::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored if missing)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("expressable_ai=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting ExpressAbleAI API");

    // Load configuration from environment
    let config = Config::from_env()?;

    let gemini = GeminiClient::from_config(&config)?;
    if !gemini.has_api_key() {
        warn!("GOOGLE_API_KEY is not set, translate and enhance requests will fail");
    }
    info!(
        "Using model {} (timeout {}s)",
        gemini.model(),
        config.request_timeout_secs
    );
    info!("Languages: {}", TargetLanguage::NAMES.join(", "));
    info!("Enhancement types: {}", EnhancementType::NAMES.join(", "));

    let state = AppState::new(Arc::new(gemini));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on {}", address);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
