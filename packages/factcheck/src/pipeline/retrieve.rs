//! Retrieval orchestration: fan-out, bucketing, dedup, and fallback.

use futures::future::join_all;
use tracing::{info, warn};

use crate::error::{FactCheckError, Result};
use crate::traits::{news::NewsSource, websearch::WebSearch};
use crate::types::article::Article;
use crate::types::config::PipelineConfig;
use crate::types::perspective::{PerspectiveBuckets, PerspectiveQuery};

/// Outcome of the retrieval stage.
#[derive(Debug, Clone)]
pub struct Retrieval {
    /// Deduplicated per-perspective buckets (plus the fallback slot).
    pub buckets: PerspectiveBuckets,

    /// Flattened unique articles in first-seen order.
    pub articles: Vec<Article>,
}

/// Run every planned query against the news source and merge the results.
///
/// Perspectives are independent: the queries run concurrently, each
/// writing its own bucket, and a single perspective's failure or empty
/// result is recorded as an empty bucket rather than aborting the stage.
/// After all perspectives are attempted the buckets are deduplicated by
/// URL in planner order. Only when the deduplicated set is wholly empty is
/// the web-search fallback invoked, once, with the original topic; if that
/// also produces nothing the stage fails with [`FactCheckError::NoDataRetrieved`].
pub async fn retrieve<N, W>(
    topic: &str,
    queries: &[PerspectiveQuery],
    news: &N,
    web: &W,
    config: &PipelineConfig,
) -> Result<Retrieval>
where
    N: NewsSource + ?Sized,
    W: WebSearch + ?Sized,
{
    let searches = queries.iter().map(|pq| async move {
        match news.search(&pq.query, config.max_records_per_query).await {
            Ok(articles) => {
                info!(perspective = %pq.perspective, count = articles.len(), "perspective search complete");
                (pq.perspective, articles)
            }
            Err(e) => {
                warn!(perspective = %pq.perspective, error = %e, "perspective search failed; recording empty bucket");
                (pq.perspective, Vec::new())
            }
        }
    });

    // join_all preserves input order, so buckets land in planner order.
    let mut buckets = PerspectiveBuckets::new();
    for (perspective, articles) in join_all(searches).await {
        buckets.push(perspective, articles);
    }

    let articles = buckets.dedup_by_url();
    info!(unique = articles.len(), "retrieval merge complete");

    if articles.is_empty() {
        match web.search(topic).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(chars = text.len(), "web-search fallback produced text");
                buckets.web_search = Some(text);
            }
            Ok(_) => return Err(FactCheckError::NoDataRetrieved),
            Err(e) => {
                warn!(error = %e, "web-search fallback failed");
                return Err(FactCheckError::NoDataRetrieved);
            }
        }
    }

    Ok(Retrieval { buckets, articles })
}
