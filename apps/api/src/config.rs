use anyhow::{Context, Result};

use crate::llm_client::ANTHROPIC_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Messages endpoint. Overridable so a local stand-in can be used.
    pub llm_api_url: String,
    /// Total attempts per generation call. 1 means no retry.
    pub llm_max_attempts: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| ANTHROPIC_API_URL.to_string()),
            llm_max_attempts: parse_attempts(
                std::env::var("LLM_MAX_ATTEMPTS").ok().as_deref(),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_attempts(raw: Option<&str>) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(1);
    };
    let attempts = raw
        .trim()
        .parse::<u32>()
        .context("LLM_MAX_ATTEMPTS must be a positive integer")?;
    anyhow::ensure!(attempts >= 1, "LLM_MAX_ATTEMPTS must be at least 1");
    Ok(attempts)
}
