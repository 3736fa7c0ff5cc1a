//! Command implementations.

pub mod config;
pub mod folder;
pub mod process;
pub mod sample;

pub use self::config::execute_config;
pub use self::folder::execute_folder;
pub use self::process::execute_process;
pub use self::sample::execute_sample;

use crate::config::Config;
use crate::error::Result;
use crate::output::{export_json, Formatter};
use fnol_engine::{
    BatchConfig, BatchProcessor, BatchReport, ClaimsProcessor, Document, DocumentFailure,
    TriageConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Where the triage configuration comes from, in priority order.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    /// `--config`
    pub explicit: Option<PathBuf>,
    /// `--preset`
    pub preset: Option<TriageConfig>,
    /// `settings.triage_config`
    pub configured: Option<PathBuf>,
}

impl ConfigSource {
    /// File that would be read, if any.
    pub fn file(&self) -> Option<&PathBuf> {
        match (&self.explicit, &self.preset) {
            (Some(path), _) => Some(path),
            (None, Some(_)) => None,
            (None, None) => self.configured.as_ref(),
        }
    }

    /// Resolve and validate the triage configuration.
    pub fn resolve(&self) -> Result<TriageConfig> {
        let config = match (self.file(), &self.preset) {
            (Some(path), _) => {
                info!("Loading triage configuration from {}", path.display());
                TriageConfig::from_file(path)?
            }
            (None, Some(preset)) => preset.clone(),
            (None, None) => TriageConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Human-readable origin of the configuration.
    pub fn describe(&self) -> String {
        match (self.file(), &self.preset) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(_)) => "built-in preset".to_string(),
            (None, None) => "built-in defaults".to_string(),
        }
    }
}

/// Everything a triage command needs.
pub struct RunContext {
    /// Shared triage pipeline
    pub processor: Arc<ClaimsProcessor>,
    /// Worker pool settings
    pub batch: BatchConfig,
    /// `--output`
    pub output: Option<PathBuf>,
    /// `--verbose`
    pub verbose: bool,
}

impl RunContext {
    /// Build the pipeline from resolved configuration.
    pub fn new(
        source: &ConfigSource,
        settings: &Config,
        output: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        let processor = ClaimsProcessor::new(source.resolve()?)?;
        Ok(Self {
            processor: Arc::new(processor),
            batch: settings.batch.clone(),
            output,
            verbose,
        })
    }

    /// Triage loaded documents; load failures keep their position in the report.
    pub async fn triage(
        &self,
        loaded: Vec<std::result::Result<Document, DocumentFailure>>,
    ) -> Result<BatchReport> {
        let batch = BatchProcessor::new(Arc::clone(&self.processor), self.batch.clone())?;

        let documents: Vec<Document> = loaded
            .iter()
            .filter_map(|slot| slot.as_ref().ok().cloned())
            .collect();
        let mut processed = batch.process_documents(documents).await.outcomes.into_iter();

        let mut report = BatchReport::default();
        for slot in loaded {
            match slot {
                Ok(_) => report.outcomes.extend(processed.next()),
                Err(failure) => report.push_failure(failure),
            }
        }
        Ok(report)
    }

    /// Print a report, export it, and print statistics in verbose mode.
    pub fn emit(&self, report: &BatchReport, formatter: &Formatter) -> Result<()> {
        for failure in report.failures() {
            eprintln!(
                "{}",
                formatter.error(&format!("{}: {}", failure.document_name, failure.reason))
            );
        }

        println!("{}", formatter.format_report(report)?);

        if let Some(path) = &self.output {
            export_json(report, formatter.shape(), path)?;
            eprintln!(
                "{}",
                formatter.success(&format!(
                    "Wrote {} record(s) to {}",
                    report.records().count(),
                    path.display()
                ))
            );
        }

        if self.verbose {
            eprintln!();
            eprintln!("{}", report.metrics().summary());
        }

        Ok(())
    }
}
