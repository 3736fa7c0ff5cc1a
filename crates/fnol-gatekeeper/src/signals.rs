//! Red-flag detection: fraud keywords and estimate discrepancies

use crate::SignalConfig;
use fnol_domain::{format_currency, AttributeRecord};
use std::fmt;
use tracing::debug;

/// A single investigation signal
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// A configured keyword appears in the incident description
    Keyword(String),

    /// Estimated damage and initial estimate disagree too much
    Discrepancy {
        /// Estimated damage amount
        estimated: f64,
        /// Initial estimate amount
        initial: f64,
        /// `|estimated - initial| / estimated`
        ratio: f64,
        /// Configured threshold the ratio exceeded
        threshold: f64,
    },
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Keyword(keyword) => write!(
                f,
                "Red flag detected: '{}' found in incident description",
                keyword
            ),
            Signal::Discrepancy {
                estimated,
                initial,
                ratio,
                threshold,
            } => write!(
                f,
                "Inconsistency detected: estimated damage {} differs from initial estimate {} \
                 by {:.0}% (threshold {:.0}%)",
                format_currency(*estimated),
                format_currency(*initial),
                ratio * 100.0,
                threshold * 100.0
            ),
        }
    }
}

/// Scans attribute records for investigation signals
#[derive(Debug, Clone)]
pub struct SignalDetector {
    config: SignalConfig,
    lowered_keywords: Vec<String>,
}

impl SignalDetector {
    /// Create a detector with the given configuration
    pub fn new(config: SignalConfig) -> Self {
        let lowered_keywords = config
            .fraud_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        Self {
            config,
            lowered_keywords,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Investigation flags as output strings, in detection order
    pub fn detect(&self, record: &AttributeRecord) -> Vec<String> {
        self.detect_signals(record)
            .iter()
            .map(Signal::to_string)
            .collect()
    }

    /// Keyword signals in keyword-list order, then at most one discrepancy
    pub fn detect_signals(&self, record: &AttributeRecord) -> Vec<Signal> {
        let mut signals = self.keyword_signals(record);
        if let Some(signal) = self.discrepancy_signal(record) {
            signals.push(signal);
        }
        if !signals.is_empty() {
            debug!("Detected {} investigation signals", signals.len());
        }
        signals
    }

    fn keyword_signals(&self, record: &AttributeRecord) -> Vec<Signal> {
        let Some(description) = record.incident_description.as_deref() else {
            return Vec::new();
        };
        let description = description.to_lowercase();

        self.config
            .fraud_keywords
            .iter()
            .zip(&self.lowered_keywords)
            .filter(|(_, lowered)| description.contains(lowered.as_str()))
            .map(|(keyword, _)| Signal::Keyword(keyword.clone()))
            .collect()
    }

    fn discrepancy_signal(&self, record: &AttributeRecord) -> Option<Signal> {
        let estimated = record.estimated_damage?;
        let initial = record.initial_estimate?;
        if estimated <= 0.0 {
            return None;
        }

        let ratio = (estimated - initial).abs() / estimated;
        let threshold = self.config.inconsistency_threshold;
        (ratio > threshold).then_some(Signal::Discrepancy {
            estimated,
            initial,
            ratio,
            threshold,
        })
    }
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new(SignalConfig::default())
    }
}
