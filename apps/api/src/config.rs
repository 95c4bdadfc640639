use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres session store. When unset, sessions live in memory and are
    /// lost on restart.
    pub database_url: Option<String>,
    pub anthropic_api_key: String,
    pub port: u16,
    pub app_env: String,
    pub trace_log_path: String,
    pub agent_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL").ok(),
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            app_env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            trace_log_path: std::env::var("TRACE_LOG_PATH")
                .unwrap_or_else(|_| "data/agent_traces.jsonl".to_string()),
            agent_timeout_secs: std::env::var("AGENT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("AGENT_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
