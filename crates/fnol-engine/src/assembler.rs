//! Packages a triage decision into the output record

use fnol_domain::{AttributeRecord, Clock, Decision, OutputRecord, SystemClock};
use std::sync::Arc;

/// Builds [`OutputRecord`]s, stamping each with the injected clock
#[derive(Clone)]
pub struct ResultAssembler {
    clock: Arc<dyn Clock>,
}

impl ResultAssembler {
    /// Create an assembler reading time from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Assemble the output record for one document
    pub fn assemble(
        &self,
        document_name: &str,
        record: AttributeRecord,
        decision: Decision,
    ) -> OutputRecord {
        OutputRecord {
            document_name: document_name.to_string(),
            extracted_fields: record,
            missing_fields: decision.missing_fields,
            investigation_flags: decision.flags,
            recommended_route: decision.route,
            reasoning: decision.reasoning,
            processed_at: self.clock.now(),
        }
    }
}

impl Default for ResultAssembler {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for ResultAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultAssembler").finish_non_exhaustive()
    }
}
