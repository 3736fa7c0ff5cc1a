//! Gatekeeper configuration

use crate::GatekeeperError;
use fnol_domain::FieldName;
use serde::{Deserialize, Serialize};

/// Fields whose absence forces manual review
pub fn default_mandatory_fields() -> Vec<FieldName> {
    vec![
        FieldName::PolicyNumber,
        FieldName::PolicyholderName,
        FieldName::IncidentDate,
        FieldName::IncidentLocation,
        FieldName::IncidentDescription,
        FieldName::ClaimType,
        FieldName::AssetType,
        FieldName::EstimatedDamage,
    ]
}

/// Keywords that raise a red flag when found in the incident description
pub fn default_fraud_keywords() -> Vec<String> {
    [
        "fraud",
        "staged",
        "inconsistent",
        "suspicious",
        "questionable",
        "fabricated",
        "false claim",
        "staged incident",
        "insurance fraud",
        "claim fabrication",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}

fn default_inconsistency_threshold() -> f64 {
    0.5
}

/// Configuration for red-flag detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Keywords searched in the incident description, in reporting order
    #[serde(default = "default_fraud_keywords")]
    pub fraud_keywords: Vec<String>,

    /// Relative gap between estimated damage and initial estimate above which
    /// the claim is flagged
    #[serde(default = "default_inconsistency_threshold")]
    pub inconsistency_threshold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            fraud_keywords: default_fraud_keywords(),
            inconsistency_threshold: default_inconsistency_threshold(),
        }
    }
}

impl SignalConfig {
    /// Flag smaller estimate gaps
    pub fn strict() -> Self {
        Self {
            inconsistency_threshold: 0.25,
            ..Self::default()
        }
    }

    /// Only flag very large estimate gaps
    pub fn permissive() -> Self {
        Self {
            inconsistency_threshold: 1.0,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if let Some(index) = self.fraud_keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(GatekeeperError::Config(format!(
                "fraud keyword #{} is empty",
                index
            )));
        }
        if !self.inconsistency_threshold.is_finite() || self.inconsistency_threshold <= 0.0 {
            return Err(GatekeeperError::Config(format!(
                "inconsistency_threshold must be a positive number, got {}",
                self.inconsistency_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignalConfig::default();
        assert_eq!(config.fraud_keywords.len(), 10);
        assert_eq!(config.fraud_keywords[0], "fraud");
        assert_eq!(config.inconsistency_threshold, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(SignalConfig::strict().validate().is_ok());
        assert!(SignalConfig::permissive().validate().is_ok());
        assert!(SignalConfig::strict().inconsistency_threshold < 0.5);
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let config = SignalConfig {
            fraud_keywords: vec!["fraud".to_string(), "  ".to_string()],
            ..SignalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_threshold_rejected() {
        for threshold in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = SignalConfig {
                inconsistency_threshold: threshold,
                ..SignalConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {}", threshold);
        }
    }

    #[test]
    fn test_default_mandatory_fields() {
        let fields = default_mandatory_fields();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], FieldName::PolicyNumber);
        assert_eq!(fields[7], FieldName::EstimatedDamage);
    }
}
