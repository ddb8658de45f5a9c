//! The final outward-facing fact-check report record.

use serde::{Deserialize, Serialize};

use super::article::Article;
use super::bias::BiasClassification;
use super::perspective::{Perspective, PerspectiveBuckets};

/// Message carried by a report when every source came back empty.
pub const NO_DATA_ERROR: &str = "No data retrieved from any source";

/// Per-perspective article counts included in the final report.
///
/// GENERAL is retrieved and deduplicated but intentionally excluded from
/// this summary. Counts reflect post-deduplication bucket sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerspectiveCounts {
    pub left: usize,
    pub right: usize,
    pub center: usize,
    pub international: usize,
}

impl From<&PerspectiveBuckets> for PerspectiveCounts {
    fn from(buckets: &PerspectiveBuckets) -> Self {
        Self {
            left: buckets.count(Perspective::Left),
            right: buckets.count(Perspective::Right),
            center: buckets.count(Perspective::Center),
            international: buckets.count(Perspective::International),
        }
    }
}

/// Final result of a pipeline run.
///
/// Every outcome (success, partial success, or terminal failure) uses
/// this same flat shape, so callers never special-case a half-populated
/// response. All fields are plain strings, numbers, and sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckReport {
    /// Synthesized report text (empty when synthesis failed or no data).
    pub report: String,

    /// Deduplicated articles, capped for the outward payload.
    pub articles: Vec<Article>,

    /// Total deduplicated article count (may exceed `articles.len()`).
    pub article_count: usize,

    /// Verbatim bias classification of the input.
    pub input_bias: String,

    /// Post-deduplication article counts per reported perspective.
    pub perspectives: PerspectiveCounts,

    /// Failure description, when the run degraded or terminated early.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FactCheckReport {
    /// Terminal-failure report: no usable data from any source.
    ///
    /// Carries empty-but-present containers and the already-computed bias
    /// text so the outward shape stays uniform.
    pub fn no_data(bias: &BiasClassification) -> Self {
        Self {
            report: String::new(),
            articles: Vec::new(),
            article_count: 0,
            input_bias: bias.to_string(),
            perspectives: PerspectiveCounts::default(),
            error: Some(NO_DATA_ERROR.to_string()),
        }
    }
}
