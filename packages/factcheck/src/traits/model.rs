//! Language-model trait.

use async_trait::async_trait;

use crate::error::Result;

/// A language-model handle.
///
/// Implementations wrap a specific provider and are expected to use
/// deterministic sampling (temperature 0): the pipeline sends each prompt
/// as a single role-tagged message and reads back plain text. Blocking,
/// single-shot request/response; no streaming.
#[async_trait]
pub trait Model: Send + Sync {
    /// Complete a single prompt and return the response text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
