//! Secondary web-search trait (fallback only).

use async_trait::async_trait;

use crate::error::SourceResult;

/// A general web-search provider used only when the structured news index
/// yields nothing.
///
/// Returns unstructured prose/snippet text rather than article records,
/// reflecting that fallback providers have a different result shape.
/// Invoked at most once per pipeline run.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Search the web for the topic, returning free-text results.
    async fn search(&self, topic: &str) -> SourceResult<String>;
}
