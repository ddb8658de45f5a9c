//! DuckDuckGo-backed secondary web search.
//!
//! Uses the keyless Instant Answer API and flattens its abstract and
//! related topics into plain prose lines. The fallback contract is
//! unstructured text; an empty string means "searched, found nothing."

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{SourceError, SourceResult};
use crate::traits::websearch::WebSearch;

const DEFAULT_BASE_URL: &str = "https://api.duckduckgo.com/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Web-search fallback backed by DuckDuckGo's Instant Answer API.
#[derive(Clone)]
pub struct DuckDuckGo {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

impl DuckDuckGo {
    /// Create a new DuckDuckGo searcher.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Set a custom base URL (for proxies or testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request deadline (default: 10 seconds).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl WebSearch for DuckDuckGo {
    async fn search(&self, topic: &str) -> SourceResult<String> {
        let response = self
            .client
            .get(&self.base_url)
            .timeout(self.timeout)
            .query(&[
                ("q", topic),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout {
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    SourceError::Transport(Box::new(e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Format(format!(
                "DuckDuckGo returned status {status}"
            )));
        }

        let raw: InstantAnswer = response
            .json()
            .await
            .map_err(|e| SourceError::Format(format!("unexpected DuckDuckGo payload: {e}")))?;

        let text = render_results(&raw);
        debug!(chars = text.len(), "DuckDuckGo fallback search complete");
        Ok(text)
    }
}

/// Flatten an Instant Answer payload into prose lines.
pub(crate) fn render_results(raw: &InstantAnswer) -> String {
    let mut lines = Vec::new();

    if !raw.abstract_text.trim().is_empty() {
        if raw.abstract_url.trim().is_empty() {
            lines.push(raw.abstract_text.trim().to_string());
        } else {
            lines.push(format!("{} ({})", raw.abstract_text.trim(), raw.abstract_url));
        }
    }

    collect_topics(&raw.related_topics, &mut lines);
    lines.join("\n")
}

fn collect_topics(topics: &[RelatedTopic], lines: &mut Vec<String>) {
    for topic in topics {
        if let Some(text) = topic.text.as_deref().filter(|t| !t.trim().is_empty()) {
            match topic.first_url.as_deref() {
                Some(url) if !url.is_empty() => lines.push(format!("- {} ({})", text.trim(), url)),
                _ => lines.push(format!("- {}", text.trim())),
            }
        }
        // Category entries nest their results one level down.
        collect_topics(&topic.topics, lines);
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InstantAnswer {
    #[serde(default, rename = "AbstractText")]
    abstract_text: String,

    #[serde(default, rename = "AbstractURL")]
    abstract_url: String,

    #[serde(default, rename = "RelatedTopics")]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RelatedTopic {
    #[serde(default, rename = "Text")]
    text: Option<String>,

    #[serde(default, rename = "FirstURL")]
    first_url: Option<String>,

    #[serde(default, rename = "Topics")]
    topics: Vec<RelatedTopic>,
}
