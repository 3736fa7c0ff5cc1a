//! Router configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Threshold is negative, infinite or NaN
    #[error("fast_track_threshold must be a finite non-negative amount, got {0}")]
    InvalidThreshold(f64),

    /// A specialist claim type entry is blank
    #[error("specialist claim type #{0} is empty")]
    EmptySpecialistType(usize),
}

/// Claim-type substrings that send a claim to the specialist queue
pub fn default_specialist_claim_types() -> Vec<String> {
    [
        "injury",
        "bodily injury",
        "personal injury",
        "workers compensation",
        "workers' compensation",
        "workers comp",
        "liability",
        "workers injury",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_fast_track_threshold() -> f64 {
    25_000.0
}

/// Routing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Case-insensitive substrings matched against the claim type, in order
    #[serde(default = "default_specialist_claim_types")]
    pub specialist_claim_types: Vec<String>,

    /// Claims with estimated damage strictly below this amount are fast-tracked
    #[serde(default = "default_fast_track_threshold")]
    pub fast_track_threshold: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            specialist_claim_types: default_specialist_claim_types(),
            fast_track_threshold: default_fast_track_threshold(),
        }
    }
}

impl RoutingConfig {
    /// Fast-track only small claims
    pub fn strict() -> Self {
        Self {
            fast_track_threshold: 10_000.0,
            ..Self::default()
        }
    }

    /// Fast-track claims up to a higher amount
    pub fn lenient() -> Self {
        Self {
            fast_track_threshold: 50_000.0,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fast_track_threshold.is_finite() || self.fast_track_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.fast_track_threshold));
        }
        if let Some(index) = self
            .specialist_claim_types
            .iter()
            .position(|t| t.trim().is_empty())
        {
            return Err(ConfigError::EmptySpecialistType(index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RoutingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fast_track_threshold, 25_000.0);
        assert_eq!(config.specialist_claim_types[0], "injury");
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(RoutingConfig::strict().validate().is_ok());
        assert!(RoutingConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_is_allowed() {
        let config = RoutingConfig {
            fast_track_threshold: 0.0,
            ..RoutingConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold() {
        for threshold in [-1.0, f64::NAN, f64::INFINITY] {
            let config = RoutingConfig {
                fast_track_threshold: threshold,
                ..RoutingConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_empty_specialist_type() {
        let config = RoutingConfig {
            specialist_claim_types: vec!["injury".to_string(), String::new()],
            ..RoutingConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptySpecialistType(1)));
    }
}
