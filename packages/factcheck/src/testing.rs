//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the fact-check
//! library without making real model or network calls.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{FactCheckError, Result, SourceError, SourceResult};
use crate::traits::{model::Model, news::NewsSource, websearch::WebSearch};
use crate::types::article::Article;

/// Shorthand article constructor for tests.
pub fn article(title: &str, url: &str) -> Article {
    Article::new(title, url)
}

fn mock_io_error(what: &str) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, what.to_string()))
}

/// A mock language model for testing.
///
/// Responses are keyed by a needle substring matched against the incoming
/// prompt, so one mock can answer the planner, classifier, and synthesizer
/// differently. Prompts matching no needle get an empty response.
#[derive(Default)]
pub struct MockModel {
    /// (needle, response) pairs checked in insertion order.
    responses: Arc<RwLock<Vec<(String, String)>>>,

    /// Needles whose prompts should fail.
    failures: Arc<RwLock<Vec<String>>>,

    /// Fail every call regardless of prompt.
    fail_all: bool,

    /// Prompts received, for assertions.
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockModel {
    /// Create a new mock model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock model that fails every call.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Respond with `response` to any prompt containing `needle`.
    pub fn with_response(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    /// Fail any prompt containing `needle`.
    pub fn fail_containing(self, needle: impl Into<String>) -> Self {
        self.failures.write().unwrap().push(needle.into());
        self
    }

    /// All prompts received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Model for MockModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.write().unwrap().push(prompt.to_string());

        if self.fail_all
            || self
                .failures
                .read()
                .unwrap()
                .iter()
                .any(|needle| prompt.contains(needle))
        {
            return Err(FactCheckError::Model(mock_io_error("mock model failure")));
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| prompt.contains(needle))
            .map(|(_, response)| response.clone())
            .unwrap_or_default())
    }
}

/// A mock news source for testing.
///
/// Returns predefined articles per query; unknown queries get an
/// empty-success result.
#[derive(Default)]
pub struct MockNewsSource {
    results: Arc<RwLock<HashMap<String, Vec<Article>>>>,
    fail_queries: Arc<RwLock<Vec<String>>>,
    calls: Arc<RwLock<Vec<(String, usize)>>>,
}

impl MockNewsSource {
    /// Create a new mock news source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add predefined articles for a query.
    pub fn with_articles(self, query: impl Into<String>, articles: Vec<Article>) -> Self {
        self.results.write().unwrap().insert(query.into(), articles);
        self
    }

    /// Make a query fail with a transport error.
    pub fn fail_query(self, query: impl Into<String>) -> Self {
        self.fail_queries.write().unwrap().push(query.into());
        self
    }

    /// All (query, limit) pairs received so far.
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl NewsSource for MockNewsSource {
    async fn search(&self, query: &str, limit: usize) -> SourceResult<Vec<Article>> {
        self.calls.write().unwrap().push((query.to_string(), limit));

        if self.fail_queries.read().unwrap().iter().any(|q| q == query) {
            return Err(SourceError::Transport(mock_io_error("mock search failure")));
        }

        let mut articles = self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        articles.truncate(limit);
        Ok(articles)
    }
}

/// A mock web-search fallback for testing.
///
/// Returns a fixed text (empty by default) and counts invocations.
#[derive(Default)]
pub struct MockWebSearch {
    text: String,
    fail: bool,
    calls: AtomicUsize,
}

impl MockWebSearch {
    /// Create a mock that returns an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Set the text returned for every search.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Number of searches performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WebSearch for MockWebSearch {
    async fn search(&self, _topic: &str) -> SourceResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(SourceError::Transport(mock_io_error("mock web search failure")));
        }

        Ok(self.text.clone())
    }
}
