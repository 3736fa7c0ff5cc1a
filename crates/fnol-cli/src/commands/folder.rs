//! Folder command implementation.

use super::RunContext;
use crate::cli::FolderArgs;
use crate::error::{CliError, Result};
use crate::loader;
use crate::output::Formatter;
use tracing::info;

/// Execute the folder command.
///
/// Unreadable files are reported and skipped; the rest of the folder is
/// still triaged.
pub async fn execute_folder(
    args: FolderArgs,
    ctx: &RunContext,
    formatter: &Formatter,
) -> Result<()> {
    if !args.dir.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "'{}' is not a directory",
            args.dir.display()
        )));
    }

    let paths = loader::discover(&args.dir)?;
    if paths.is_empty() {
        println!(
            "{}",
            formatter.warning(&format!(
                "No .txt or .pdf documents found in {}",
                args.dir.display()
            ))
        );
        return Ok(());
    }

    info!("Found {} documents in {}", paths.len(), args.dir.display());
    let report = ctx.triage(loader::load_all(&paths)).await?;
    ctx.emit(&report, formatter)
}
