//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (text limits, phone heuristics)
//! - Library extraction settings (`ExtractConfig`)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ExtractConfig, InputFormat, LogFormat, LogLevel, Opt};
