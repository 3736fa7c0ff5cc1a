//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings file problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Triage engine error (bad triage config, pattern compile failure)
    #[error(transparent)]
    Engine(#[from] fnol_engine::EngineError),

    /// Document could not be loaded
    #[error("Failed to load document: {0:#}")]
    Load(#[from] anyhow::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
