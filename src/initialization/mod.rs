//! Process-level setup for the CLI.
//!
//! Extraction itself needs no initialization; the statics it relies on are
//! compiled lazily on first use.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
