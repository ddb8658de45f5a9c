//! Pure Groq REST API client
//!
//! A clean, minimal client for the Groq API with no domain-specific logic.
//! Groq serves an OpenAI-compatible chat completions endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use groq_client::{GroqClient, ChatRequest, Message};
//!
//! let client = GroqClient::from_env()?;
//!
//! let response = client.chat_completion(ChatRequest::new("llama-3.3-70b-versatile")
//!     .message(Message::user("Hello!"))
//!     .temperature(0.0))
//!     .await?;
//!
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod types;

pub use error::{GroqError, Result};
pub use types::{ChatRequest, ChatResponse, Message, Usage};

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default per-request deadline for completion calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Pure Groq API client.
#[derive(Clone)]
pub struct GroqClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GroqClient {
    /// Create a new Groq client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from environment variable `GROQ_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| GroqError::Config("GROQ_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, compatible providers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completions API and get a response.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Groq request failed");
                GroqError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Groq API error");
            return Err(GroqError::Api(format!("Groq API error: {}", error_text)));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| GroqError::Parse(e.to_string()))?;

        let usage = chat_response.usage;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GroqError::Api("No response from Groq".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Groq chat completion"
        );

        Ok(ChatResponse { content, usage })
    }
}
