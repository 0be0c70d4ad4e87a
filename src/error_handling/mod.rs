//! Error types.
//!
//! This module provides:
//! - `HandleError`: the extraction error surfaced to callers
//! - `ConfigError`: invalid extraction settings
//! - `InitializationError`: logger setup failures
//!
//! Extraction is best effort: irregular input is skipped rather than reported.
//! The one exception is a structurally wrong call, such as passing something
//! other than a list where a URL list is required, which fails fast with
//! `HandleError::InvalidArgument`.

mod types;

// Re-export public API
pub use types::{json_type_name, ConfigError, HandleError, InitializationError};
