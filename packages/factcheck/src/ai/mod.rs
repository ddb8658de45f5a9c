//! Model implementations for the fact-check library.
//!
//! This module provides reference implementations of the `Model` trait.
//! Users can use these directly or implement their own.

#[cfg(feature = "groq")]
mod groq;

#[cfg(feature = "groq")]
pub use groq::GroqModel;
