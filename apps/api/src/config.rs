use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Application configuration loaded from environment variables.
/// Every variable has a default; the OpenAI API key is supplied per request, not here.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_base_url: String,
    pub llm_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            llm_timeout: Duration::from_secs(120),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let llm_timeout = match lookup("LLM_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => defaults.llm_timeout,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            openai_base_url: lookup("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            llm_timeout,
        })
    }
}
