//! FNOL Engine
//!
//! Wires the extractor, gatekeeper checks and router into a triage pipeline.
//!
//! # Overview
//!
//! The engine is responsible for:
//! - **Configuration**: One immutable [`TriageConfig`] injected into every component
//! - **Single documents**: [`ClaimsProcessor`] turns raw text into an [`OutputRecord`]
//! - **Batches**: [`BatchProcessor`] fans documents out over a worker pool with
//!   per-document timeouts and failure isolation
//! - **Metrics**: [`BatchMetrics`] summarizes routes, gaps and flags
//! - **Export**: strict and enhanced JSON shapes of the output record
//!
//! # Architecture
//!
//! ```text
//! raw text ─► FieldExtractor ─► AttributeRecord ─┬─► CompletenessValidator ─► missing
//!                                                └─► SignalDetector ────────► flags
//!                                                            │
//!                                  RoutingClassifier ◄───────┘
//!                                          │
//!                                  ResultAssembler (+ clock) ─► OutputRecord
//! ```
//!
//! # Usage
//!
//! ```
//! use fnol_engine::{ClaimsProcessor, TriageConfig};
//! use fnol_domain::Route;
//!
//! let processor = ClaimsProcessor::new(TriageConfig::default()).unwrap();
//! let output = processor.process(
//!     "claim.txt",
//!     "Policy Number: POL-001\n\
//!      Policyholder Name: Jane Roe\n\
//!      Date of Loss: 03/01/2024\n\
//!      Location: 1 Elm St\n\
//!      Describe Loss: minor fender bender\n\
//!      Claim Type: Property Damage\n\
//!      Vehicle Type: Automobile\n\
//!      Estimated Damage: $3,000\n",
//! );
//!
//! assert_eq!(output.recommended_route, Route::FastTrack);
//! ```
//!
//! ## Configuration Presets
//!
//! ```
//! use fnol_engine::TriageConfig;
//!
//! // Default: $25,000 fast track, 50% estimate discrepancy
//! let config = TriageConfig::default();
//!
//! // Strict: $10,000 fast track, 25% discrepancy
//! let config = TriageConfig::strict();
//!
//! // Lenient: $50,000 fast track, 100% discrepancy
//! let config = TriageConfig::lenient();
//! ```

#![warn(missing_docs)]

mod assembler;
mod batch;
mod config;
mod error;
mod metrics;
pub mod output;
mod processor;
mod samples;

pub use assembler::ResultAssembler;
pub use batch::{
    BatchConfig, BatchProcessor, BatchReport, Document, DocumentFailure, DocumentOutcome,
};
pub use config::TriageConfig;
pub use error::EngineError;
pub use metrics::BatchMetrics;
pub use output::{validate_core_format, CoreOutput, FormatError, OutputShape};
pub use processor::ClaimsProcessor;
pub use samples::sample_documents;

pub use fnol_domain::OutputRecord;
