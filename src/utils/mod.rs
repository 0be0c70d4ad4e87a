//! Shared utilities.
//!
//! This module provides:
//! - Static regex and CSS selector compilation helpers

mod statics;

pub use statics::{compile_regex_unsafe, parse_selector_unsafe};
