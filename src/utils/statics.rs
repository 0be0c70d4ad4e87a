//! Helpers for building process-wide static matchers.
//!
//! Every regex and CSS selector in this crate is a compile-time constant that is
//! compiled once into a `LazyLock`. A failure to compile one of them is a
//! programming error, so these helpers panic with the offending pattern and the
//! name of the static that owns it.

use regex::Regex;
use scraper::Selector;

/// Compiles a constant regex pattern.
///
/// # Panics
///
/// Panics if the pattern does not compile (indicates a programming error).
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Parses a constant CSS selector.
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
