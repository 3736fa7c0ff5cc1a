//! Gatekeeper error types

use thiserror::Error;

/// Errors raised while configuring the gatekeeper checks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatekeeperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
