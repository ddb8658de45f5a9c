//! Data types for the fact-check pipeline.

pub mod article;
pub mod bias;
pub mod config;
pub mod perspective;
pub mod report;
