//! Error type definitions.

use log::SetLoggerError;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by the extraction API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// A parameter has the wrong type, e.g. a single string where a list of
    /// URLs is required.
    #[error("The \"{parameter}\" parameter must be {expected}, got {found}")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
        /// What the parameter must be
        expected: &'static str,
        /// What was passed instead
        found: &'static str,
    },
}

impl HandleError {
    pub(crate) fn invalid_argument(
        parameter: &'static str,
        expected: &'static str,
        found: &Value,
    ) -> Self {
        HandleError::InvalidArgument {
            parameter,
            expected,
            found: json_type_name(found),
        }
    }
}

/// Errors for invalid extraction settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting is outside its allowed range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the setting
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Describes the JSON type of a value, with an article, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
