//! GDELT-backed news source.
//!
//! Queries the GDELT DOC 2.0 API in `artlist` mode, newest first, and
//! normalizes the heterogeneous records into [`Article`]s.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{SourceError, SourceResult};
use crate::traits::news::NewsSource;
use crate::types::article::{self, Article};

const DEFAULT_BASE_URL: &str = "https://api.gdeltproject.org/api/v2/doc/doc";

/// Default per-request deadline for the news index.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// News source backed by the GDELT Project's document index.
#[derive(Clone)]
pub struct GdeltClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for GdeltClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GdeltClient {
    /// Create a new GDELT client.
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
impl NewsSource for GdeltClient {
    async fn search(&self, query: &str, limit: usize) -> SourceResult<Vec<Article>> {
        if query.trim().is_empty() {
            return Err(SourceError::Format("query must be non-empty".to_string()));
        }
        if limit == 0 {
            return Err(SourceError::Format("limit must be greater than zero".to_string()));
        }

        let response = self
            .client
            .get(&self.base_url)
            .timeout(self.timeout)
            .query(&[
                ("query", query),
                ("mode", "artlist"),
                ("maxrecords", &limit.to_string()),
                ("format", "json"),
                ("sortby", "date"),
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
            warn!(status = %status, "GDELT returned non-success status");
            return Err(SourceError::Format(format!(
                "GDELT returned status {status}"
            )));
        }

        // GDELT answers malformed queries with a plain-text message and a
        // 200 status, so decode from the body rather than via .json().
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(Box::new(e)))?;

        let articles = parse_article_list(&body)?;
        debug!(count = articles.len(), "GDELT search complete");
        Ok(articles)
    }
}

/// Parse a GDELT `artlist` JSON body into normalized articles.
///
/// Zero matches is a valid empty-success, not an error.
pub(crate) fn parse_article_list(body: &str) -> SourceResult<Vec<Article>> {
    let list: ArticleList = serde_json::from_str(body)
        .map_err(|e| SourceError::Format(format!("unexpected GDELT payload: {e}")))?;

    Ok(list.articles.into_iter().map(Article::from).collect())
}

#[derive(Debug, Deserialize)]
struct ArticleList {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

/// One raw GDELT record; any field may be absent.
#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    url: Option<String>,
    domain: Option<String>,
    sourcecountry: Option<String>,
    seendate: Option<String>,
    language: Option<String>,
    #[serde(default)]
    tone: Value,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let tone = match raw.tone {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            _ => article::NO_TONE.to_string(),
        };

        Article::new(
            raw.title.unwrap_or_else(|| article::NO_TITLE.to_string()),
            raw.url.unwrap_or_else(|| article::NO_URL.to_string()),
        )
        .with_domain(raw.domain.unwrap_or_else(|| article::UNKNOWN.to_string()))
        .with_source_country(raw.sourcecountry.unwrap_or_else(|| article::UNKNOWN.to_string()))
        .with_seen_date(raw.seendate.unwrap_or_else(|| article::UNKNOWN.to_string()))
        .with_tone(tone)
        .with_language(raw.language.unwrap_or_else(|| article::UNKNOWN.to_string()))
    }
}
