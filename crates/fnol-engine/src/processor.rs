//! Single-document triage pipeline

use crate::assembler::ResultAssembler;
use crate::config::TriageConfig;
use crate::EngineError;
use fnol_domain::{AttributeRecord, Clock, Decision, OutputRecord, SystemClock};
use fnol_extractor::FieldExtractor;
use fnol_gatekeeper::{CompletenessValidator, SignalDetector};
use fnol_router::RoutingClassifier;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs extraction, checks, routing and assembly for one document
///
/// Immutable after construction; share it across threads with an `Arc`.
///
/// # Examples
///
/// ```
/// use fnol_engine::{ClaimsProcessor, TriageConfig};
/// use fnol_domain::Route;
///
/// let processor = ClaimsProcessor::new(TriageConfig::default()).unwrap();
/// let output = processor.process("empty.txt", "");
///
/// assert_eq!(output.recommended_route, Route::ManualReview);
/// assert_eq!(output.missing_fields.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct ClaimsProcessor {
    config: TriageConfig,
    extractor: FieldExtractor,
    completeness: CompletenessValidator,
    signals: SignalDetector,
    router: RoutingClassifier,
    assembler: ResultAssembler,
}

impl ClaimsProcessor {
    /// Validate the configuration and build a processor using wall-clock time
    pub fn new(config: TriageConfig) -> Result<Self, EngineError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Validate the configuration and build a processor with an injected clock
    pub fn with_clock(config: TriageConfig, clock: Arc<dyn Clock>) -> Result<Self, EngineError> {
        config.validate()?;

        let extractor = FieldExtractor::new(&config.patterns)?;
        let completeness = CompletenessValidator::new(config.mandatory()?);
        let signals = SignalDetector::new(config.signals.clone());
        let router = RoutingClassifier::new(config.routing.clone());

        info!(
            "Claims processor ready: {} mandatory fields, {} fraud keywords, fast track below {}",
            config.mandatory_fields.len(),
            config.signals.fraud_keywords.len(),
            config.routing.fast_track_threshold
        );

        Ok(Self {
            config,
            extractor,
            completeness,
            signals,
            router,
            assembler: ResultAssembler::new(clock),
        })
    }

    /// Configuration the processor was built from
    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Extract, check and route a document without assembling an output record
    pub fn triage(&self, raw_text: &str) -> (AttributeRecord, Decision) {
        let record = self.extractor.extract(raw_text);
        let missing = self.completeness.missing_fields(&record);
        let flags = self.signals.detect(&record);
        let decision = self.router.decide(&record, missing, flags);
        (record, decision)
    }

    /// Triage one document
    pub fn process(&self, document_name: &str, raw_text: &str) -> OutputRecord {
        debug!("Processing {} ({} bytes)", document_name, raw_text.len());

        let (record, decision) = self.triage(raw_text);

        info!(
            "{}: {} ({} fields, {} missing, {} flags)",
            document_name,
            decision.route,
            record.present_count(),
            decision.missing_fields.len(),
            decision.flags.len()
        );

        self.assembler.assemble(document_name, record, decision)
    }
}
