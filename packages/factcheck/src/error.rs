//! Typed errors for the fact-check library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during fact-check operations.
#[derive(Debug, Error)]
pub enum FactCheckError {
    /// A language-model invocation failed.
    ///
    /// Always recovered locally by the pipeline with a labeled fallback
    /// value; it never aborts a run on its own.
    #[error("model invocation failed: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A search source failed.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Every perspective search and the web fallback came back empty.
    ///
    /// The single condition under which the pipeline short-circuits
    /// before synthesis.
    #[error("no data retrieved from any source")]
    NoDataRetrieved,
}

/// Errors that can occur while querying a search source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request exceeded its deadline.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Any other network or protocol failure.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The source answered but the payload could not be understood.
    #[error("malformed response: {0}")]
    Format(String),
}

/// Result type alias for fact-check operations.
pub type Result<T> = std::result::Result<T, FactCheckError>;

/// Result type alias for source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
