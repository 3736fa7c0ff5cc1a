//! Sample command implementation.

use super::RunContext;
use crate::cli::SampleArgs;
use crate::error::Result;
use crate::output::Formatter;
use fnol_engine::sample_documents;
use std::fs;

/// Execute the sample command.
pub async fn execute_sample(
    args: SampleArgs,
    ctx: &RunContext,
    formatter: &Formatter,
) -> Result<()> {
    let documents = sample_documents();

    if let Some(dir) = &args.write {
        fs::create_dir_all(dir)?;
        for document in &documents {
            fs::write(dir.join(&document.name), &document.text)?;
        }
        eprintln!(
            "{}",
            formatter.info(&format!(
                "Wrote {} sample notices to {}",
                documents.len(),
                dir.display()
            ))
        );
    }

    let report = ctx.triage(documents.into_iter().map(Ok).collect()).await?;
    ctx.emit(&report, formatter)
}
