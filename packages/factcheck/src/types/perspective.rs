//! Perspectives, planned queries, and per-perspective article buckets.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::article::Article;

/// One of the five fixed editorial-angle labels used to bucket both
/// queries and retrieved articles.
///
/// `ALL` defines the canonical processing order; dedup attribution and
/// report section order both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Perspective {
    General,
    Left,
    Right,
    Center,
    International,
}

impl Perspective {
    /// All perspectives in canonical processing order.
    pub const ALL: [Perspective; 5] = [
        Perspective::General,
        Perspective::Left,
        Perspective::Right,
        Perspective::Center,
        Perspective::International,
    ];

    /// The label used in planner output and report headings.
    pub fn label(&self) -> &'static str {
        match self {
            Perspective::General => "GENERAL",
            Perspective::Left => "LEFT",
            Perspective::Right => "RIGHT",
            Perspective::Center => "CENTER",
            Perspective::International => "INTERNATIONAL",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A search query planned for one target perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerspectiveQuery {
    /// The perspective this query targets.
    pub perspective: Perspective,

    /// Opaque boolean-search expression understood by the news source.
    pub query: String,
}

impl PerspectiveQuery {
    /// Create a new perspective query.
    pub fn new(perspective: Perspective, query: impl Into<String>) -> Self {
        Self {
            perspective,
            query: query.into(),
        }
    }
}

/// Articles grouped by perspective, plus the special web-search slot.
///
/// Bucket iteration order is insertion order (planner order). The
/// `web_search` slot holds unstructured fallback text and is excluded from
/// article deduplication and counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerspectiveBuckets {
    /// Ordered perspective → articles map.
    pub articles: IndexMap<Perspective, Vec<Article>>,

    /// Unstructured fallback text, present only when every structured
    /// bucket came back empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search: Option<String>,
}

impl PerspectiveBuckets {
    /// Create an empty bucket set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append articles to a perspective's bucket, creating it if needed.
    pub fn push(&mut self, perspective: Perspective, articles: Vec<Article>) {
        self.articles
            .entry(perspective)
            .or_default()
            .extend(articles);
    }

    /// Number of articles currently held for a perspective.
    pub fn count(&self, perspective: Perspective) -> usize {
        self.articles
            .get(&perspective)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// True when no structured bucket holds any article.
    pub fn has_no_articles(&self) -> bool {
        self.articles.values().all(Vec::is_empty)
    }

    /// Deduplicate across buckets by article URL.
    ///
    /// Scans buckets in insertion order and keeps the first occurrence of
    /// each URL, removing repeats from later buckets in place. An article
    /// appearing under two perspectives is attributed to whichever was
    /// processed first. Returns the flattened unique sequence in
    /// first-seen order.
    pub fn dedup_by_url(&mut self) -> Vec<Article> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique = Vec::new();

        for articles in self.articles.values_mut() {
            articles.retain(|article| seen.insert(article.url.clone()));
            unique.extend(articles.iter().cloned());
        }

        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str) -> Article {
        Article::new(format!("Title {url}"), url)
    }

    #[test]
    fn test_perspective_order_and_labels() {
        let labels: Vec<_> = Perspective::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec!["GENERAL", "LEFT", "RIGHT", "CENTER", "INTERNATIONAL"]
        );
    }

    #[test]
    fn test_dedup_keeps_first_seen_in_bucket_order() {
        let mut buckets = PerspectiveBuckets::new();
        buckets.push(
            Perspective::Left,
            vec![article("https://a.com/1"), article("https://a.com/2")],
        );
        buckets.push(
            Perspective::Center,
            vec![article("https://a.com/2"), article("https://a.com/3")],
        );

        let unique = buckets.dedup_by_url();

        let urls: Vec<_> = unique.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.com/1", "https://a.com/2", "https://a.com/3"]);

        // The overlap is attributed to the first-processed perspective.
        assert_eq!(buckets.count(Perspective::Left), 2);
        assert_eq!(buckets.count(Perspective::Center), 1);
    }

    #[test]
    fn test_dedup_produces_no_duplicate_urls() {
        let mut buckets = PerspectiveBuckets::new();
        buckets.push(Perspective::General, vec![article("https://x.com"), article("https://x.com")]);
        buckets.push(Perspective::Right, vec![article("https://x.com")]);

        let unique = buckets.dedup_by_url();
        assert_eq!(unique.len(), 1);
        assert_eq!(buckets.count(Perspective::General), 1);
        assert_eq!(buckets.count(Perspective::Right), 0);
    }

    #[test]
    fn test_has_no_articles_ignores_web_search() {
        let mut buckets = PerspectiveBuckets::new();
        buckets.push(Perspective::General, vec![]);
        buckets.web_search = Some("some prose".to_string());

        assert!(buckets.has_no_articles());
    }
}
