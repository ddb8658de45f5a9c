//! Multi-Perspective Fact-Check Pipeline
//!
//! Takes a claim or transcript fragment and produces a multi-perspective,
//! citation-backed fact-check report: classify the political slant of the
//! input, fan out angled search queries against a news index, deduplicate
//! and bucket the coverage by perspective, and synthesize a structured
//! report with one language-model call.
//!
//! The pipeline aggregates and summarizes available coverage; the
//! true/false/misleading judgment is delegated to the model call, whose
//! output is treated as an opaque but structured artifact.
//!
//! # Usage
//!
//! ```rust,ignore
//! use factcheck::{DuckDuckGo, FactChecker, GdeltClient};
//! use factcheck::ai::GroqModel;
//! use groq_client::GroqClient;
//!
//! let model = GroqModel::new(GroqClient::from_env()?);
//! let checker = FactChecker::new(model, GdeltClient::new(), DuckDuckGo::new());
//!
//! let report = checker.check("US troops Greenland").await;
//! println!("{}", report.report);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Model, NewsSource, WebSearch)
//! - [`types`] - Pipeline data types
//! - [`pipeline`] - Planner, retrieval orchestrator, and synthesizer
//! - [`sources`] - Source implementations (GDELT, DuckDuckGo)
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod pipeline;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "groq")]
pub mod ai;

// Re-export core types at crate root
pub use error::{FactCheckError, Result, SourceError, SourceResult};
pub use traits::{model::Model, news::NewsSource, websearch::WebSearch};
pub use types::{
    article::Article,
    bias::{BiasClassification, BiasLabel},
    config::PipelineConfig,
    perspective::{Perspective, PerspectiveBuckets, PerspectiveQuery},
    report::{FactCheckReport, PerspectiveCounts},
};

// Re-export the pipeline coordinator and stages
pub use pipeline::{
    planner::{classify_bias, plan_queries},
    retrieve::{retrieve, Retrieval},
    synthesize::{build_context, synthesize},
    FactChecker,
};

// Re-export sources
pub use sources::{DuckDuckGo, GdeltClient};
