//! FNOL Domain Layer
//!
//! This crate contains the core data model for FNOL (First Notice of Loss)
//! triage. It defines the vocabulary every other crate depends upon and has
//! no knowledge of pattern matching, configuration files or I/O.
//!
//! ## Key Concepts
//!
//! - **FieldName**: One of the 16 attributes a loss notice may carry
//! - **AttributeRecord**: The attributes recovered from one document
//! - **Route**: The downstream workflow queue a claim is sent to
//! - **Decision**: Route, reasoning, missing fields and investigation flags
//! - **OutputRecord**: The external data contract handed to workflow systems
//!
//! ## Architecture
//!
//! - Pure data types only
//! - Records are created fresh per document and never shared between documents
//! - Trait definitions for the collaborators the core depends on (the clock)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod currency;
pub mod decision;
pub mod field;
pub mod record;
pub mod route;
pub mod traits;

// Re-exports for convenience
pub use currency::format_currency;
pub use decision::{Decision, OutputRecord};
pub use field::{serialize_field_names, FieldKind, FieldName};
pub use record::{AttributeRecord, FieldRef, FieldValue, RecordError};
pub use route::Route;
pub use traits::{Clock, FixedClock, SystemClock};
