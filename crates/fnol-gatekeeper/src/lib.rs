//! FNOL Gatekeeper
//!
//! Quality checks run on every extracted attribute record before routing.
//!
//! The Gatekeeper provides:
//! - Completeness checking against the mandatory field list
//! - Fraud keyword detection in the incident description
//! - Estimate discrepancy detection
//!
//! Both checks are pure functions of the record and their configuration and
//! can run in either order.
//!
//! # Examples
//!
//! ```
//! use fnol_domain::{AttributeRecord, FieldName};
//! use fnol_gatekeeper::{CompletenessValidator, SignalConfig, SignalDetector};
//!
//! let mut record = AttributeRecord::new();
//! record.incident_description = Some("Claim looks staged".to_string());
//!
//! let validator = CompletenessValidator::new(vec![FieldName::PolicyNumber]);
//! assert_eq!(validator.missing_fields(&record), vec![FieldName::PolicyNumber]);
//!
//! let detector = SignalDetector::new(SignalConfig::default());
//! assert_eq!(detector.detect(&record).len(), 1);
//! ```

#![warn(missing_docs)]

mod completeness;
mod config;
mod error;
mod signals;

pub use completeness::CompletenessValidator;
pub use config::{default_fraud_keywords, default_mandatory_fields, SignalConfig};
pub use error::GatekeeperError;
pub use signals::{Signal, SignalDetector};
