//! Search source implementations.

pub mod duckduckgo;
pub mod gdelt;

pub use duckduckgo::DuckDuckGo;
pub use gdelt::GdeltClient;
