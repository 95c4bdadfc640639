mod agents;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod orchestrator;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::llm_client::LlmClient;
use crate::orchestrator::executor::LlmExecutor;
use crate::orchestrator::session::{MemorySessionStore, PgSessionStore, SessionStore};
use crate::orchestrator::trace::TraceLog;
use crate::orchestrator::{Runner, APP_NAME};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("synergy_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Synergy API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the session store: Postgres when configured, in-memory
    // otherwise
    let store: Arc<dyn SessionStore> = match &config.database_url {
        Some(url) => {
            let db = create_pool(url).await?;
            ensure_schema(&db).await?;
            Arc::new(PgSessionStore::new(db, APP_NAME))
        }
        None => {
            warn!("DATABASE_URL not set; sessions will not survive a restart");
            Arc::new(MemorySessionStore::new())
        }
    };

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Trace log shared with the dashboard
    let trace = TraceLog::new(config.trace_log_path.clone());

    // One runner for the whole process, injected into every handler
    let runner = Runner::new(
        store,
        Arc::new(LlmExecutor::new(llm)),
        trace,
        Duration::from_secs(config.agent_timeout_secs),
    );

    let state = AppState {
        runner: Arc::new(runner),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
