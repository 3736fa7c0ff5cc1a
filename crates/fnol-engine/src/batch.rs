//! Concurrent batch processing with per-document isolation

use crate::metrics::BatchMetrics;
use crate::processor::ClaimsProcessor;
use crate::EngineError;
use fnol_domain::OutputRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// A named document whose text has already been decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Name reported in the output record
    pub name: String,

    /// Raw document text
    pub text: String,
}

impl Document {
    /// Create a document
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A document that produced no output record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFailure {
    /// Name of the failed document
    pub document_name: String,

    /// Why it failed
    pub reason: String,
}

/// Result for one document of a batch
#[derive(Debug, Clone)]
pub enum DocumentOutcome {
    /// The document was triaged
    Processed(OutputRecord),

    /// Loading or processing failed; the rest of the batch is unaffected
    Failed(DocumentFailure),
}

impl DocumentOutcome {
    /// Name of the document this outcome belongs to
    pub fn document_name(&self) -> &str {
        match self {
            DocumentOutcome::Processed(record) => &record.document_name,
            DocumentOutcome::Failed(failure) => &failure.document_name,
        }
    }
}

fn default_max_workers() -> usize {
    4
}

fn default_timeout_per_document_secs() -> u64 {
    30
}

/// Batch driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of documents processed at once
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Time allowed for a single document (seconds)
    #[serde(default = "default_timeout_per_document_secs")]
    pub timeout_per_document_secs: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            timeout_per_document_secs: default_timeout_per_document_secs(),
        }
    }
}

impl BatchConfig {
    /// Per-document timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_per_document_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_workers == 0 {
            return Err(EngineError::Config(
                "max_workers must be greater than 0".to_string(),
            ));
        }
        if self.timeout_per_document_secs == 0 {
            return Err(EngineError::Config(
                "timeout_per_document_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcomes of a batch, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One outcome per input document
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Successfully triaged documents
    pub fn records(&self) -> impl Iterator<Item = &OutputRecord> {
        self.outcomes.iter().filter_map(|o| match o {
            DocumentOutcome::Processed(record) => Some(record),
            DocumentOutcome::Failed(_) => None,
        })
    }

    /// Documents that failed
    pub fn failures(&self) -> impl Iterator<Item = &DocumentFailure> {
        self.outcomes.iter().filter_map(|o| match o {
            DocumentOutcome::Failed(failure) => Some(failure),
            DocumentOutcome::Processed(_) => None,
        })
    }

    /// Record a failure that happened before processing, e.g. an unreadable file
    pub fn push_failure(&mut self, failure: DocumentFailure) {
        self.outcomes.push(DocumentOutcome::Failed(failure));
    }

    /// Number of outcomes
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the batch was empty
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Summary statistics over the batch
    pub fn metrics(&self) -> BatchMetrics {
        let mut metrics = BatchMetrics::new();
        for outcome in &self.outcomes {
            match outcome {
                DocumentOutcome::Processed(record) => metrics.record_output(record),
                DocumentOutcome::Failed(_) => metrics.record_failure(),
            }
        }
        metrics
    }
}

/// Drives a shared [`ClaimsProcessor`] over many documents
///
/// Each document runs on the blocking thread pool under its own timeout, with
/// at most `max_workers` in flight. A panic or timeout in one document is
/// reported as a [`DocumentFailure`] and never aborts the batch.
///
/// # Examples
///
/// ```no_run
/// use fnol_engine::{BatchConfig, BatchProcessor, ClaimsProcessor, Document, TriageConfig};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let processor = Arc::new(ClaimsProcessor::new(TriageConfig::default())?);
///     let batch = BatchProcessor::new(processor, BatchConfig::default())?;
///
///     let report = batch
///         .process_documents(vec![Document::new("a.txt", "Policy Number: POL-1")])
///         .await;
///     println!("{}", report.metrics().summary());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    processor: Arc<ClaimsProcessor>,
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a batch driver
    pub fn new(processor: Arc<ClaimsProcessor>, config: BatchConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { processor, config })
    }

    /// Batch settings in use
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Process every document, returning outcomes in input order
    pub async fn process_documents(&self, documents: Vec<Document>) -> BatchReport {
        info!(
            "Processing batch of {} documents ({} workers, {}s timeout)",
            documents.len(),
            self.config.max_workers,
            self.config.timeout_per_document_secs
        );

        let processor = Arc::clone(&self.processor);
        let report = run_isolated(
            documents,
            self.config.max_workers,
            self.config.timeout(),
            move |document: &Document| processor.process(&document.name, &document.text),
        )
        .await;

        debug!(
            "Batch finished: {} processed, {} failed",
            report.records().count(),
            report.failures().count()
        );
        report
    }
}

/// Run `work` over every document on the blocking pool
///
/// At most `max_workers` documents run at once, each under `limit`. A panic
/// or timeout in one document becomes its [`DocumentFailure`]; outcomes come
/// back in input order. A timed-out task is not cancelled; its result is
/// dropped when it finishes.
pub(crate) async fn run_isolated<F>(
    documents: Vec<Document>,
    max_workers: usize,
    limit: Duration,
    work: F,
) -> BatchReport
where
    F: Fn(&Document) -> OutputRecord + Send + Sync + 'static,
{
    let work = Arc::new(work);
    let semaphore = Arc::new(Semaphore::new(max_workers));
    let mut handles = Vec::with_capacity(documents.len());

    for document in documents {
        let name = document.name.clone();
        let work = Arc::clone(&work);
        let semaphore = Arc::clone(&semaphore);

        let handle = tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return Err("worker pool closed".to_string()),
            };
            let task = tokio::task::spawn_blocking(move || work(&document));
            match timeout(limit, task).await {
                Ok(Ok(record)) => Ok(record),
                Ok(Err(e)) => Err(format!("processing failed: {}", e)),
                Err(_) => Err(format!("timed out after {:?}", limit)),
            }
        });
        handles.push((name, handle));
    }

    let mut report = BatchReport::default();
    for (name, handle) in handles {
        let outcome = match handle.await {
            Ok(Ok(record)) => DocumentOutcome::Processed(record),
            Ok(Err(reason)) => {
                warn!("{} failed: {}", name, reason);
                DocumentOutcome::Failed(DocumentFailure {
                    document_name: name,
                    reason,
                })
            }
            Err(e) => {
                warn!("{} failed: {}", name, e);
                DocumentOutcome::Failed(DocumentFailure {
                    document_name: name,
                    reason: format!("worker task failed: {}", e),
                })
            }
        };
        report.outcomes.push(outcome);
    }
    report
}
