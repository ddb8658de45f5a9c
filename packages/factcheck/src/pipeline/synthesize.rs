//! Report synthesis: bounded context assembly and the final model call.

use tracing::{info, warn};

use crate::pipeline::prompts;
use crate::pipeline::retrieve::Retrieval;
use crate::traits::model::Model;
use crate::types::bias::BiasClassification;
use crate::types::config::PipelineConfig;
use crate::types::perspective::PerspectiveBuckets;
use crate::types::report::{FactCheckReport, PerspectiveCounts};

/// Synthesize the final report from deduplicated, bucketed evidence.
///
/// Issues exactly one model call with the strict output template. When the
/// call fails, the report text is empty and the error field carries the
/// failure, but articles and perspective counts are still populated from
/// the already-deduplicated data: synthesis failure degrades the report,
/// it does not discard retrieved evidence.
pub async fn synthesize<M: Model + ?Sized>(
    topic: &str,
    bias: &BiasClassification,
    retrieval: &Retrieval,
    model: &M,
    config: &PipelineConfig,
) -> FactCheckReport {
    let context = build_context(&retrieval.buckets, config.max_context_articles);
    let bias_text = bias.to_string();
    let prompt = prompts::format_synthesize_report_prompt(topic, &bias_text, &context);

    let perspectives = PerspectiveCounts::from(&retrieval.buckets);
    let mut articles = retrieval.articles.clone();
    articles.truncate(config.max_report_articles);
    let article_count = retrieval.articles.len();

    match model.complete(&prompt).await {
        Ok(report) => {
            info!(article_count, "report synthesis complete");
            FactCheckReport {
                report,
                articles,
                article_count,
                input_bias: bias_text,
                perspectives,
                error: None,
            }
        }
        Err(e) => {
            warn!(error = %e, "report synthesis failed; returning evidence without report text");
            FactCheckReport {
                report: String::new(),
                articles,
                article_count,
                input_bias: bias_text,
                perspectives,
                error: Some(format!("Synthesis error: {e}")),
            }
        }
    }
}

/// Render the bounded synthesis context.
///
/// Each non-empty bucket contributes a perspective heading and at most
/// `max_per_bucket` article lines, in bucket order. The web-search slot,
/// when present, is included verbatim under its own heading.
pub fn build_context(buckets: &PerspectiveBuckets, max_per_bucket: usize) -> String {
    let mut sections = Vec::new();

    for (perspective, articles) in &buckets.articles {
        if articles.is_empty() {
            continue;
        }
        let lines: Vec<String> = articles
            .iter()
            .take(max_per_bucket)
            .map(|a| format!("- {} ({}, {}) - {}", a.title, a.domain, a.source_country, a.url))
            .collect();
        sections.push(format!(
            "### {} PERSPECTIVE:\n{}",
            perspective.label(),
            lines.join("\n")
        ));
    }

    if let Some(text) = &buckets.web_search {
        sections.push(format!("### WEB_SEARCH PERSPECTIVE:\n{text}"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{article, MockModel};
    use crate::types::perspective::Perspective;

    fn sample_retrieval() -> Retrieval {
        let mut buckets = PerspectiveBuckets::new();
        buckets.push(
            Perspective::General,
            (1..=7)
                .map(|i| {
                    article(&format!("g{i}"), &format!("https://g.com/{i}"))
                        .with_domain("g.com")
                        .with_source_country("US")
                })
                .collect(),
        );
        buckets.push(Perspective::Left, vec![article("l1", "https://l.com/1")]);
        buckets.push(Perspective::Right, vec![]);
        let articles = buckets.dedup_by_url();
        Retrieval { buckets, articles }
    }

    #[test]
    fn test_build_context_caps_articles_and_skips_empty_buckets() {
        let retrieval = sample_retrieval();
        let context = build_context(&retrieval.buckets, 5);

        assert!(context.contains("### GENERAL PERSPECTIVE:"));
        assert!(context.contains("### LEFT PERSPECTIVE:"));
        assert!(!context.contains("### RIGHT PERSPECTIVE:"));
        assert!(context.contains("- g5 (g.com, US) - https://g.com/5"));
        assert!(!context.contains("https://g.com/6"));
    }

    #[test]
    fn test_build_context_includes_web_search_verbatim() {
        let mut buckets = PerspectiveBuckets::new();
        buckets.web_search = Some("raw snippet text".to_string());

        let context = build_context(&buckets, 5);
        assert!(context.contains("### WEB_SEARCH PERSPECTIVE:\nraw snippet text"));
    }

    #[tokio::test]
    async fn test_synthesize_success_populates_report() {
        let model =
            MockModel::new().with_response("expert fact-checker", "**Core Fact**: synthesized");
        let retrieval = sample_retrieval();
        let bias = BiasClassification::parse("CENTER/NEUTRAL: balanced");

        let report = synthesize(
            "topic",
            &bias,
            &retrieval,
            &model,
            &PipelineConfig::default(),
        )
        .await;

        assert_eq!(report.report, "**Core Fact**: synthesized");
        assert!(report.error.is_none());
        assert_eq!(report.article_count, 8);
        assert_eq!(report.perspectives.left, 1);
        assert_eq!(report.input_bias, "CENTER/NEUTRAL: balanced");
    }

    #[tokio::test]
    async fn test_synthesize_failure_keeps_evidence_and_counts() {
        let model = MockModel::failing();
        let retrieval = sample_retrieval();
        let bias = BiasClassification::unknown("Error during analysis");

        let report = synthesize(
            "topic",
            &bias,
            &retrieval,
            &model,
            &PipelineConfig::default(),
        )
        .await;

        assert!(report.report.is_empty());
        assert!(report.error.as_deref().unwrap().starts_with("Synthesis error:"));
        assert_eq!(report.articles.len(), 8);
        assert_eq!(report.article_count, 8);
        assert_eq!(report.perspectives.left, 1);
    }

    #[tokio::test]
    async fn test_synthesize_caps_outward_articles() {
        let model = MockModel::new().with_response("expert fact-checker", "report");
        let mut buckets = PerspectiveBuckets::new();
        buckets.push(
            Perspective::General,
            (0..40)
                .map(|i| article(&format!("t{i}"), &format!("https://g.com/{i}")))
                .collect(),
        );
        let articles = buckets.dedup_by_url();
        let retrieval = Retrieval { buckets, articles };
        let bias = BiasClassification::unknown("");

        let report = synthesize(
            "topic",
            &bias,
            &retrieval,
            &model,
            &PipelineConfig::default(),
        )
        .await;

        assert_eq!(report.articles.len(), 30);
        assert_eq!(report.article_count, 40);
    }
}
