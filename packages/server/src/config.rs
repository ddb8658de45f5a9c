//! Server configuration loaded from the environment.

use anyhow::{Context, Result};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key (required; validated before any network call).
    pub groq_api_key: String,

    /// HTTP listen port.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let groq_api_key =
            std::env::var("GROQ_API_KEY").context("GROQ_API_KEY not set")?;

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().context("PORT is not a valid port number")?,
            Err(_) => 5002,
        };

        Ok(Self { groq_api_key, port })
    }
}
