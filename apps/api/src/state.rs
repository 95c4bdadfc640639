use std::sync::Arc;

use crate::config::Config;
use crate::orchestrator::Runner;

/// Shared application state injected into all route handlers via Axum
/// extractors. The runner is the one long-lived orchestration handle,
/// constructed at startup; handlers never build their own collaborators.
#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<Runner>,
    pub config: Config,
}
