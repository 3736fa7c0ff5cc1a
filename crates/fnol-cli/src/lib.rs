//! FNOL CLI library.
//!
//! Command-line front end for the triage engine: argument parsing, the
//! settings file, document loading (`.txt`, `.pdf`) and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
