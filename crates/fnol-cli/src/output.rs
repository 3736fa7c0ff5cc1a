//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use fnol_domain::{format_currency, OutputRecord, Route};
use fnol_engine::output::to_json_array;
use fnol_engine::{BatchReport, OutputShape};
use std::fs;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// JSON shape matching the selected format.
    pub fn shape(&self) -> OutputShape {
        match self.format {
            OutputFormat::Strict => OutputShape::Strict,
            OutputFormat::Table | OutputFormat::Json => OutputShape::Enhanced,
        }
    }

    /// Format the processed records of a batch.
    pub fn format_report(&self, report: &BatchReport) -> Result<String> {
        let records: Vec<&OutputRecord> = report.records().collect();
        match self.format {
            OutputFormat::Table => Ok(self.format_table(&records)),
            OutputFormat::Json | OutputFormat::Strict => self.format_json(&records),
        }
    }

    fn format_json(&self, records: &[&OutputRecord]) -> Result<String> {
        let value = to_json_array(records, self.shape())?;
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_table(&self, records: &[&OutputRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No documents processed.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Document", "Route", "Damage", "Missing", "Flags", "Reasoning"]);

        for record in records {
            let damage = record
                .extracted_fields
                .estimated_damage
                .map(format_currency)
                .unwrap_or_else(|| "-".to_string());
            let missing = if record.missing_fields.is_empty() {
                "-".to_string()
            } else {
                record
                    .missing_fields
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            builder.push_record([
                record.document_name.clone(),
                self.route(record.recommended_route),
                damage,
                missing,
                record.investigation_flags.len().to_string(),
                record.reasoning.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Route label, colored by how much attention the queue needs.
    pub fn route(&self, route: Route) -> String {
        let color = match route {
            Route::FastTrack => "green",
            Route::StandardProcessing => "blue",
            Route::SpecialistQueue => "cyan",
            Route::InvestigationQueue => "red",
            Route::ManualReview => "yellow",
        };
        self.colorize(route.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Write the processed records of a batch to `path` as a JSON array.
pub fn export_json(report: &BatchReport, shape: OutputShape, path: &Path) -> Result<()> {
    let records: Vec<&OutputRecord> = report.records().collect();
    let value = to_json_array(&records, shape)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(&value)?)?;
    Ok(())
}
