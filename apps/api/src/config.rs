use anyhow::{Context, Result};

pub const DEFAULT_OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";

/// Process configuration loaded from environment variables.
///
/// User-facing settings (API keys, resume, preferences) are not read here; they
/// live in the settings store and are loaded into `AppState` at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, settings and recent jobs are kept in memory only.
    pub database_url: Option<String>,
    pub openrouter_api_url: String,
    pub notion_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            openrouter_api_url: optional_env("OPENROUTER_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_API_URL.to_string()),
            notion_api_url: optional_env("NOTION_API_URL")
                .unwrap_or_else(|| DEFAULT_NOTION_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
