//! Article value records.

use serde::{Deserialize, Serialize};

/// Sentinel for a missing title.
pub const NO_TITLE: &str = "No Title";

/// Sentinel for a missing URL.
pub const NO_URL: &str = "No URL";

/// Sentinel for other missing string fields.
pub const UNKNOWN: &str = "Unknown";

/// Sentinel for a missing tone score.
pub const NO_TONE: &str = "N/A";

/// A single news article as normalized from a source record.
///
/// Immutable once constructed. The `url` is the deduplication identity;
/// every other field falls back to a sentinel when the source omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline of the article.
    pub title: String,

    /// Canonical URL as reported by the source (dedup identity).
    pub url: String,

    /// Publishing domain (e.g., "reuters.com").
    pub domain: String,

    /// Source country code or name.
    #[serde(rename = "sourcecountry")]
    pub source_country: String,

    /// Timestamp the index first saw the article, as reported.
    #[serde(rename = "seendate")]
    pub seen_date: String,

    /// Sentiment indicator attached by the index; opaque pass-through.
    pub tone: String,

    /// Article language.
    pub language: String,
}

impl Article {
    /// Create an article with the given title and URL, sentinels elsewhere.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            domain: UNKNOWN.to_string(),
            source_country: UNKNOWN.to_string(),
            seen_date: UNKNOWN.to_string(),
            tone: NO_TONE.to_string(),
            language: UNKNOWN.to_string(),
        }
    }

    /// Set the publishing domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the source country.
    pub fn with_source_country(mut self, country: impl Into<String>) -> Self {
        self.source_country = country.into();
        self
    }

    /// Set the seen date.
    pub fn with_seen_date(mut self, date: impl Into<String>) -> Self {
        self.seen_date = date.into();
        self
    }

    /// Set the tone score.
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// Set the language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_sentinels() {
        let article = Article::new("Headline", "https://example.com/a");
        assert_eq!(article.domain, UNKNOWN);
        assert_eq!(article.source_country, UNKNOWN);
        assert_eq!(article.seen_date, UNKNOWN);
        assert_eq!(article.tone, NO_TONE);
        assert_eq!(article.language, UNKNOWN);
    }

    #[test]
    fn test_serialized_field_names() {
        let article = Article::new("Headline", "https://example.com/a")
            .with_source_country("US")
            .with_seen_date("20260101T000000Z");
        let json = serde_json::to_value(&article).unwrap();

        assert_eq!(json["sourcecountry"], "US");
        assert_eq!(json["seendate"], "20260101T000000Z");
    }
}
