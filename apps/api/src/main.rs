mod config;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod notes;
mod outreach;
mod routes;
mod settings;
mod state;
mod storage;
mod summarizer;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::notes::NotesClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::memory::MemoryKvStore;
use crate::storage::postgres::PgKvStore;
use crate::storage::KvStore;

/// Upper bound on any outbound call (model, notes API, job pages).
const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

/// Job boards serve reduced markup to unknown clients.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting AutoScout API v{}", env!("CARGO_PKG_VERSION"));

    // Settings store: PostgreSQL when configured, process memory otherwise
    let store: Arc<dyn KvStore> = match &config.database_url {
        Some(url) => Arc::new(PgKvStore::new(create_pool(url).await?)),
        None => Arc::new(MemoryKvStore::new()),
    };
    info!("Settings store initialized (backend: {})", store.backend());

    settings::initialize_defaults(store.as_ref()).await?;
    let settings = settings::load_settings(store.as_ref()).await?;
    info!(
        "Settings loaded (tone: {}, OpenRouter key configured: {})",
        settings.user_preferences.tone,
        !settings.open_router_api_key.is_empty()
    );

    let api_client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
    let page_client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(BROWSER_USER_AGENT)
        .build()?;

    let llm = LlmClient::new(api_client.clone(), config.openrouter_api_url.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let notes = NotesClient::new(api_client, config.notion_api_url.clone());

    let state = AppState::new(store, llm, notes, page_client, settings);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
