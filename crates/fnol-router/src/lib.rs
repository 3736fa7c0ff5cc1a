//! FNOL Router
//!
//! Decides which workflow queue a triaged claim goes to.
//!
//! Routing is a fixed-priority chain of rules. Each rule pairs a predicate
//! with a route and a reasoning builder; the first rule whose predicate holds
//! decides, and later rules are never evaluated:
//!
//! 1. `MANUAL_REVIEW` when mandatory fields are missing
//! 2. `INVESTIGATION_QUEUE` when investigation flags were raised
//! 3. `SPECIALIST_QUEUE` when the claim type names a specialist line
//! 4. `FAST_TRACK` when the estimated damage is below the threshold
//! 5. `STANDARD_PROCESSING` otherwise

#![warn(missing_docs)]

pub mod classifier;
pub mod config;
pub mod rules;

pub use classifier::RoutingClassifier;
pub use config::{default_specialist_claim_types, ConfigError, RoutingConfig};
pub use rules::{Rule, RoutingContext};
