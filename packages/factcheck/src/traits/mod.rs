//! Core trait abstractions for the fact-check library.
//!
//! These traits define the seams the pipeline depends on: a language
//! model, a structured news index, and an unstructured web-search
//! fallback. Each is dependency-injected so tests substitute mocks.

pub mod model;
pub mod news;
pub mod websearch;
