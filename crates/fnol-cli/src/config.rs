//! Settings file for the CLI.
//!
//! Lives at `~/.fnol/config.toml`. The triage rules themselves are a separate
//! TOML file (see `fnol config init`); the settings only point at it.

use crate::error::{CliError, Result};
use fnol_engine::BatchConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Worker pool for `process`, `folder` and `sample`
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Triage configuration used when `--config` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage_config: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// Full JSON output records
    Json,
    /// JSON with the four core fields only
    Strict,
}

impl Config {
    /// Directory holding the settings and the default triage config.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".fnol"))
    }

    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Default location written by `fnol config init`.
    pub fn default_triage_path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("triage.toml"))
    }

    /// Load configuration from file or fall back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a specific file, defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.batch.validate()?;
        Ok(config)
    }

    /// Record `triage` as the default triage configuration in the settings
    /// file at `path`, keeping every other setting.
    pub fn set_triage_config_in(path: &Path, triage: &Path) -> Result<Self> {
        let mut config = Self::load_from(path)?;
        config.settings.triage_config = Some(triage.to_path_buf());
        config.save_to(path)?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            triage_config: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
