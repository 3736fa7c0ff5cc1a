//! Configuration for the triage engine

use crate::EngineError;
use fnol_domain::FieldName;
use fnol_extractor::PatternTable;
use fnol_gatekeeper::{default_mandatory_fields, SignalConfig};
use fnol_router::RoutingConfig;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Complete triage configuration
///
/// Read-only once a processor has been built from it. Every section has a
/// default, so a TOML file only needs the values it changes:
///
/// ```toml
/// mandatory_fields = ["policy_number", "claim_type", "estimated_damage"]
///
/// [signals]
/// inconsistency_threshold = 0.4
///
/// [routing]
/// fast_track_threshold = 10000.0
///
/// [patterns]
/// policy_number = ['ref\s*#\s*(\d+)']
/// ```
///
/// Lists under `[patterns]` replace the built-in patterns of that field
/// only; other fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Fields whose absence forces manual review, in reporting order
    #[serde(default = "default_mandatory_names")]
    pub mandatory_fields: Vec<String>,

    /// Fraud keywords and discrepancy threshold
    #[serde(default)]
    pub signals: SignalConfig,

    /// Specialist claim types and fast-track threshold
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Extraction patterns per field
    #[serde(default, deserialize_with = "patterns_over_defaults")]
    pub patterns: PatternTable,
}

fn default_mandatory_names() -> Vec<String> {
    default_mandatory_fields()
        .iter()
        .map(|f| f.as_str().to_string())
        .collect()
}

fn patterns_over_defaults<'de, D>(deserializer: D) -> Result<PatternTable, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = PatternTable::deserialize(deserializer)?;
    Ok(PatternTable::default().overlay(overrides))
}

impl Default for TriageConfig {
    /// Default configuration: 8 mandatory fields, $25,000 fast track, 50% discrepancy
    fn default() -> Self {
        Self {
            mandatory_fields: default_mandatory_names(),
            signals: SignalConfig::default(),
            routing: RoutingConfig::default(),
            patterns: PatternTable::default(),
        }
    }
}

impl TriageConfig {
    /// Strict preset: lower fast-track threshold, tighter discrepancy ratio
    pub fn strict() -> Self {
        Self {
            signals: SignalConfig::strict(),
            routing: RoutingConfig::strict(),
            ..Self::default()
        }
    }

    /// Lenient preset: higher fast-track threshold, looser discrepancy ratio
    pub fn lenient() -> Self {
        Self {
            signals: SignalConfig::permissive(),
            routing: RoutingConfig::lenient(),
            ..Self::default()
        }
    }

    /// Replace the mandatory field list
    pub fn with_mandatory_fields(mut self, fields: &[FieldName]) -> Self {
        self.mandatory_fields = fields.iter().map(|f| f.as_str().to_string()).collect();
        self
    }

    /// Parsed mandatory fields
    pub fn mandatory(&self) -> Result<Vec<FieldName>, EngineError> {
        self.mandatory_fields
            .iter()
            .map(|name| {
                FieldName::parse(name).ok_or_else(|| {
                    EngineError::Config(format!("unknown mandatory field '{}'", name))
                })
            })
            .collect()
    }

    /// Validate the configuration
    ///
    /// Every check that could otherwise surface while processing documents
    /// runs here, including compiling each pattern.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.mandatory_fields.is_empty() {
            return Err(EngineError::Config(
                "mandatory_fields must not be empty".to_string(),
            ));
        }

        let mandatory = self.mandatory()?;
        let mut seen = HashSet::new();
        for field in &mandatory {
            if !seen.insert(*field) {
                return Err(EngineError::Config(format!(
                    "duplicate mandatory field '{}'",
                    field
                )));
            }
        }

        self.patterns.validate()?;
        if let Some(field) = mandatory.iter().find(|f| !self.patterns.covers(**f)) {
            return Err(EngineError::Config(format!(
                "mandatory field '{}' has no extraction patterns",
                field
            )));
        }

        self.signals.validate()?;
        self.routing.validate()?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str)
            .map_err(|e| EngineError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Write configuration to a TOML file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EngineError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
