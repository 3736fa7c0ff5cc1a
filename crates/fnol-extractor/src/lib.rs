//! FNOL Extractor
//!
//! Converts unstructured loss-notice text into an [`AttributeRecord`].
//!
//! # Overview
//!
//! Extraction is driven entirely by a [`PatternTable`]: an ordered list of
//! regular expressions per field. For each field the first pattern that
//! matches anywhere in the document wins, its capture is normalized, and the
//! value is stored. Fields with no match stay absent.
//!
//! # Architecture
//!
//! ```text
//! Text → FieldExtractor → AttributeRecord → Gatekeeper → Router
//! ```
//!
//! # Normalization
//!
//! - Text values are trimmed and internal whitespace runs collapse to one space
//! - Currency values drop `$` and `,` and parse as non-negative decimals
//! - A currency capture that does not parse leaves the field absent
//!
//! # Example Usage
//!
//! ```
//! use fnol_extractor::{FieldExtractor, PatternTable};
//!
//! let extractor = FieldExtractor::new(&PatternTable::default()).unwrap();
//! let record = extractor.extract("Policy Number: POL-001\nEstimated Damage: $3,000");
//!
//! assert_eq!(record.policy_number.as_deref(), Some("POL-001"));
//! assert_eq!(record.estimated_damage, Some(3000.0));
//! ```
//!
//! [`AttributeRecord`]: fnol_domain::AttributeRecord

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod normalize;
mod types;


pub use config::PatternTable;
pub use error::ExtractorError;
pub use extractor::FieldExtractor;
pub use types::{Extraction, FieldMatch, MatchOutcome};
