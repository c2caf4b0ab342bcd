use anyhow::{Context, Result};

/// Default generation model used when GEMINI_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
}

impl Config {
    /// Load configuration from the .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let gemini_api_key =
            std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            gemini_api_key,
            model,
        })
    }
}
