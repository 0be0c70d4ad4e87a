//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_MAX_TEXT_CHARS;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What the input document contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// An HTML page
    Html,
    /// Plain text
    Text,
    /// A JSON array of URL strings
    Urls,
}

/// Extraction settings (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use contact_handles::ExtractConfig;
///
/// let config = ExtractConfig {
///     include_uncertain_phones: false,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Maximum visible text extracted from a page, in characters
    pub max_text_chars: usize,

    /// Whether to scan visible text for phone numbers (`phonesUncertain`)
    pub include_uncertain_phones: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            include_uncertain_phones: true,
        }
    }
}

impl ExtractConfig {
    /// Checks that the settings can be used for extraction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `max_text_chars` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_text_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_text_chars",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Extract handles from a saved page
/// contact_handles page.html
///
/// # Plain text from stdin, without guessed phone numbers
/// cat notes.txt | contact_handles --input text --no-uncertain-phones
///
/// # A JSON array of link URLs
/// contact_handles links.json --input urls --pretty
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "contact_handles",
    about = "Extracts emails, phone numbers and social profile URLs from HTML, text or URL lists."
)]
pub struct Opt {
    /// File to read (stdin when omitted or `-`)
    #[arg(value_parser)]
    pub file: Option<PathBuf>,

    /// Input format: html|text|urls
    #[arg(long, value_enum, default_value_t = InputFormat::Html)]
    pub input: InputFormat,

    /// Maximum visible text to scan, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_TEXT_CHARS)]
    pub max_text_chars: usize,

    /// Leave `phonesUncertain` empty instead of guessing phone numbers from text
    #[arg(long)]
    pub no_uncertain_phones: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for ExtractConfig {
    fn from(opt: &Opt) -> Self {
        Self {
            max_text_chars: opt.max_text_chars,
            include_uncertain_phones: !opt.no_uncertain_phones,
        }
    }
}
