//! Error types for the triage engine

use fnol_extractor::ExtractorError;
use fnol_gatekeeper::GatekeeperError;
use thiserror::Error;

/// Errors that can occur while configuring or driving the engine
///
/// Processing a single document never fails; every variant here is raised
/// either at startup or by the I/O around configuration files.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pattern table does not compile
    #[error(transparent)]
    Patterns(#[from] ExtractorError),

    /// Signal detection settings are invalid
    #[error(transparent)]
    Signals(#[from] GatekeeperError),

    /// Routing settings are invalid
    #[error("Configuration error: {0}")]
    Routing(#[from] fnol_router::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Whether the error comes from invalid configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            EngineError::Config(_)
                | EngineError::Patterns(_)
                | EngineError::Signals(_)
                | EngineError::Routing(_)
        )
    }
}
