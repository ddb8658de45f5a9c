//! Structured news-index trait.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::types::article::Article;

/// A structured news index queried with boolean-search expressions.
///
/// One call issues one bounded-timeout request. Implementations normalize
/// heterogeneous records into [`Article`]s, substituting sentinels for
/// missing fields rather than failing the call.
///
/// A successful search with zero matches returns `Ok(vec![])`; callers
/// must distinguish "searched, found nothing" from "could not search."
/// No retries happen inside the adapter; retry policy, if any, belongs to
/// the orchestrator.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Execute one search query, returning at most `limit` articles.
    ///
    /// `query` must be non-empty and `limit` greater than zero.
    async fn search(&self, query: &str, limit: usize) -> SourceResult<Vec<Article>>;
}
