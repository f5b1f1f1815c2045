use anyhow::{Context, Result};

/// Value shipped in sample `.env` files. Treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated at startup; a missing Groq key switches the API to demo mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: std::env::var("GROQ_API_KEY").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The Groq key, if one is usable. Blank keys and the placeholder count as absent.
    pub fn credential(&self) -> Option<&str> {
        self.groq_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}
