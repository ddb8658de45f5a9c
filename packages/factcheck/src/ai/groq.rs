//! Groq implementation of the Model trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use factcheck::ai::GroqModel;
//! use groq_client::GroqClient;
//!
//! let model = GroqModel::new(GroqClient::from_env()?);
//! let checker = FactChecker::new(model, GdeltClient::new(), DuckDuckGo::new());
//! ```

use async_trait::async_trait;
use groq_client::{ChatRequest, GroqClient, Message};

use crate::error::{FactCheckError, Result};
use crate::traits::model::Model;

const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq-backed language model with deterministic sampling.
#[derive(Clone)]
pub struct GroqModel {
    client: GroqClient,
    model: String,
}

impl GroqModel {
    /// Create a new Groq model handle.
    pub fn new(client: GroqClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set the chat model (default: llama-3.3-70b-versatile).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Model for GroqModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::user(prompt))
            .temperature(0.0);

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| FactCheckError::Model(Box::new(e)))?;

        Ok(response.content)
    }
}
