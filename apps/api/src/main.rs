mod advice;
mod analysis;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod profile_health;
mod routes;
mod state;
mod tracker;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advice::writer::{AdviceWriter, LlmAdviceWriter, TemplateAdviceWriter};
use crate::analysis::Analyzer;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the advice writer once; the analyzer never checks again
    let writer = build_advice_writer(&config);
    let analyzer = Analyzer::new(writer);
    info!("Advice backend: {}", analyzer.backend());

    let state = AppState::new(config.clone(), analyzer);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// LLM-backed writer when a key is configured and the client builds; templates otherwise.
fn build_advice_writer(config: &Config) -> Arc<dyn AdviceWriter> {
    let Some(api_key) = config.llm_api_key() else {
        info!("No LLM provider configured, using template advice");
        return Arc::new(TemplateAdviceWriter);
    };

    match LlmClient::new(api_key.to_string(), config.llm_timeout) {
        Ok(client) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmAdviceWriter::new(Arc::new(client)))
        }
        Err(e) => {
            warn!("Could not initialize LLM client, using template advice: {e}");
            Arc::new(TemplateAdviceWriter)
        }
    }
}
