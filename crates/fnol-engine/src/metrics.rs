//! Summary statistics over processed batches

use fnol_domain::{OutputRecord, Route};
use std::collections::HashMap;

/// Metrics collected while processing a batch
///
/// Tracks route distribution, missing fields, flags and extraction coverage.
#[derive(Debug, Clone, Default)]
pub struct BatchMetrics {
    /// Documents routed per queue
    pub routes: HashMap<Route, usize>,

    /// Documents that produced an output record
    pub documents_processed: usize,

    /// Documents that failed to load or process
    pub documents_failed: usize,

    /// Missing mandatory fields summed over all documents
    pub total_missing_fields: usize,

    /// Investigation flags summed over all documents
    pub total_flags: usize,

    extraction_rate_sum: f64,
}

impl BatchMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a triaged document
    pub fn record_output(&mut self, output: &OutputRecord) {
        *self.routes.entry(output.recommended_route).or_insert(0) += 1;
        self.documents_processed += 1;
        self.total_missing_fields += output.missing_fields.len();
        self.total_flags += output.investigation_flags.len();
        self.extraction_rate_sum += output.extracted_fields.extraction_rate();
    }

    /// Record a failed document
    pub fn record_failure(&mut self) {
        self.documents_failed += 1;
    }

    /// Documents routed to a queue
    pub fn count(&self, route: Route) -> usize {
        self.routes.get(&route).copied().unwrap_or(0)
    }

    /// Share of processed documents routed to a queue (0-100)
    pub fn route_percentage(&self, route: Route) -> f64 {
        if self.documents_processed == 0 {
            return 0.0;
        }
        self.count(route) as f64 * 100.0 / self.documents_processed as f64
    }

    /// Mean share of the 16 attributes found per document (0.0-1.0)
    pub fn mean_extraction_rate(&self) -> f64 {
        if self.documents_processed == 0 {
            return 0.0;
        }
        self.extraction_rate_sum / self.documents_processed as f64
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Batch Summary".to_string(),
            "=============".to_string(),
            format!("Documents processed: {}", self.documents_processed),
            format!("Documents failed: {}", self.documents_failed),
            String::new(),
        ];

        if self.documents_processed > 0 {
            lines.push("Routing distribution:".to_string());
            for route in Route::ALL {
                let count = self.count(route);
                if count > 0 {
                    lines.push(format!(
                        "  {}: {} ({:.1}%)",
                        route,
                        count,
                        self.route_percentage(route)
                    ));
                }
            }
            lines.push(String::new());
        }

        lines.push(format!("Missing mandatory fields: {}", self.total_missing_fields));
        lines.push(format!("Investigation flags: {}", self.total_flags));
        lines.push(format!(
            "Mean extraction rate: {:.1}%",
            self.mean_extraction_rate() * 100.0
        ));

        lines.join("\n")
    }
}
