//! The fact-check pipeline: planning, retrieval, and synthesis.
//!
//! Stages run strictly in sequence: planner output gates retrieval, and
//! retrieval output gates synthesis. Every invocation's working data is
//! local to the call, so an in-flight run can be abandoned at any await
//! point without corrupting shared state.

pub mod planner;
pub mod prompts;
pub mod retrieve;
pub mod synthesize;

pub use retrieve::Retrieval;

use tracing::{info, warn};

use crate::traits::{model::Model, news::NewsSource, websearch::WebSearch};
use crate::types::config::PipelineConfig;
use crate::types::report::FactCheckReport;

/// The pipeline coordinator.
///
/// Holds the injected collaborators (model, news index, web-search
/// fallback) and sequences the stages. No state is carried across runs.
///
/// # Example
///
/// ```rust,ignore
/// let checker = FactChecker::new(model, GdeltClient::new(), DuckDuckGo::new());
/// let report = checker.check("US troops Greenland").await;
/// println!("{}", report.report);
/// ```
pub struct FactChecker<M: Model, N: NewsSource, W: WebSearch> {
    model: M,
    news: N,
    web: W,
    config: PipelineConfig,
}

impl<M: Model, N: NewsSource, W: WebSearch> FactChecker<M, N, W> {
    /// Create a new pipeline with default configuration.
    pub fn new(model: M, news: N, web: W) -> Self {
        Self {
            model,
            news,
            web,
            config: PipelineConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(model: M, news: N, web: W, config: PipelineConfig) -> Self {
        Self {
            model,
            news,
            web,
            config,
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline for a topic.
    ///
    /// Always returns the uniform [`FactCheckReport`] shape: leaf failures
    /// are absorbed into degraded-but-valid data, and the one terminal
    /// condition (no usable data from any source) is shaped into an
    /// error-flagged report with empty-but-present containers.
    pub async fn check(&self, topic: &str) -> FactCheckReport {
        info!(topic, "starting fact-check pipeline");

        let bias = planner::classify_bias(topic, &self.model).await;
        let queries = planner::plan_queries(topic, &self.model).await;

        let retrieval =
            match retrieve::retrieve(topic, &queries, &self.news, &self.web, &self.config).await {
                Ok(retrieval) => retrieval,
                Err(e) => {
                    warn!(error = %e, "pipeline terminated before synthesis");
                    return FactCheckReport::no_data(&bias);
                }
            };

        synthesize::synthesize(topic, &bias, &retrieval, &self.model, &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{article, MockModel, MockNewsSource, MockWebSearch};
    use crate::types::report::NO_DATA_ERROR;

    const PLAN_RESPONSE: &str = "\
GENERAL: q-general
LEFT: q-left
RIGHT: q-right
CENTER: q-center
INTERNATIONAL: q-international";

    fn planning_model() -> MockModel {
        MockModel::new()
            .with_response("political bias", "CENTER/NEUTRAL: Descriptive claim.")
            .with_response("search queries", PLAN_RESPONSE)
            .with_response("expert fact-checker", "**Core Fact**: the report")
    }

    fn articles(prefix: &str, n: usize) -> Vec<crate::types::article::Article> {
        (1..=n)
            .map(|i| article(&format!("{prefix}{i}"), &format!("https://{prefix}.com/{i}")))
            .collect()
    }

    #[tokio::test]
    async fn test_end_to_end_counts_and_dedup() {
        // GENERAL returns 12, LEFT 3, RIGHT 0, CENTER 4, INTERNATIONAL 2,
        // with 2 URL overlaps between GENERAL and CENTER.
        let mut general = articles("g", 10);
        general.push(article("shared1", "https://shared.com/1"));
        general.push(article("shared2", "https://shared.com/2"));
        let mut center = articles("c", 2);
        center.push(article("shared1", "https://shared.com/1"));
        center.push(article("shared2", "https://shared.com/2"));

        let news = MockNewsSource::new()
            .with_articles("q-general", general)
            .with_articles("q-left", articles("l", 3))
            .with_articles("q-center", center)
            .with_articles("q-international", articles("i", 2));

        let checker = FactChecker::new(planning_model(), news, MockWebSearch::new());
        let report = checker.check("Germany troops Greenland").await;

        assert_eq!(report.article_count, 19);
        assert_eq!(report.articles.len(), 19);
        assert!(report.error.is_none());
        assert_eq!(report.report, "**Core Fact**: the report");
        assert_eq!(report.input_bias, "CENTER/NEUTRAL: Descriptive claim.");

        // Counts are post-dedup bucket sizes; the overlaps are attributed
        // to GENERAL (processed first), which the summary excludes.
        assert_eq!(report.perspectives.left, 3);
        assert_eq!(report.perspectives.right, 0);
        assert_eq!(report.perspectives.center, 2);
        assert_eq!(report.perspectives.international, 2);

        // No duplicate URLs in the outward payload.
        let mut urls: Vec<_> = report.articles.iter().map(|a| a.url.clone()).collect();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), 19);
    }

    #[tokio::test]
    async fn test_end_to_end_no_data_shape() {
        let checker = FactChecker::new(
            planning_model(),
            MockNewsSource::new(),
            MockWebSearch::new(),
        );
        let report = checker.check("arbitrary unindexed nonsense string").await;

        assert_eq!(report.error.as_deref(), Some(NO_DATA_ERROR));
        assert!(report.articles.is_empty());
        assert_eq!(report.article_count, 0);
        assert_eq!(report.perspectives.left, 0);
        assert_eq!(report.perspectives.international, 0);
        assert!(report.report.is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_web_fallback_feeds_synthesis() {
        let model = planning_model();
        let web = MockWebSearch::new().with_text("snippet about the claim");

        let checker = FactChecker::new(model, MockNewsSource::new(), web);
        let report = checker.check("thin topic").await;

        assert!(report.error.is_none());
        assert_eq!(report.report, "**Core Fact**: the report");
        assert_eq!(report.article_count, 0);
    }

    #[tokio::test]
    async fn test_end_to_end_planner_failure_still_retrieves() {
        // Planner output is garbage, so all three fallback queries are the
        // raw topic; the news source matches on it.
        let model = MockModel::new()
            .with_response("political bias", "CENTER/NEUTRAL: fine.")
            .with_response("search queries", "sorry, I cannot help with that")
            .with_response("expert fact-checker", "report text");
        let news = MockNewsSource::new().with_articles("some claim", articles("g", 2));

        let checker = FactChecker::new(model, news, MockWebSearch::new());
        let report = checker.check("some claim").await;

        assert!(report.error.is_none());
        assert_eq!(report.article_count, 2);
    }
}
