//! Configuration for the fact-check pipeline.

use serde::{Deserialize, Serialize};

/// Tunable bounds for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Record cap passed to the news source per perspective query.
    ///
    /// Default: 20.
    pub max_records_per_query: usize,

    /// Articles rendered per bucket in the synthesis context.
    ///
    /// Keeps the model-context budget bounded. Default: 5.
    pub max_context_articles: usize,

    /// Deduplicated articles included in the outward report payload.
    ///
    /// The underlying set may be larger during synthesis. Default: 30.
    pub max_report_articles: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_records_per_query: 20,
            max_context_articles: 5,
            max_report_articles: 30,
        }
    }
}

impl PipelineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-query record cap.
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records_per_query = max;
        self
    }

    /// Set the per-bucket context article cap.
    pub fn with_max_context_articles(mut self, max: usize) -> Self {
        self.max_context_articles = max;
        self
    }

    /// Set the outward report article cap.
    pub fn with_max_report_articles(mut self, max: usize) -> Self {
        self.max_report_articles = max;
        self
    }
}
