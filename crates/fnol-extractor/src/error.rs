//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building an extractor
///
/// Extraction itself never fails: a pattern that does not match, or a
/// currency capture that does not parse, leaves the attribute absent.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Pattern table names a field that does not exist
    #[error("Unknown field in pattern table: {0}")]
    UnknownField(String),

    /// Pattern does not compile
    #[error("Invalid pattern #{index} for '{field}': {message}")]
    InvalidPattern {
        /// Field the pattern belongs to
        field: String,
        /// Position of the pattern in the field's list
        index: usize,
        /// Compiler message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Config(format!("Failed to parse TOML: {}", e))
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Config(format!("Failed to serialize to TOML: {}", e))
    }
}
