//! Process command implementation.

use super::RunContext;
use crate::cli::ProcessArgs;
use crate::error::Result;
use crate::loader;
use crate::output::Formatter;

/// Execute the process command.
pub async fn execute_process(
    args: ProcessArgs,
    ctx: &RunContext,
    formatter: &Formatter,
) -> Result<()> {
    let loaded = loader::load_all(&args.files);
    let report = ctx.triage(loaded).await?;
    ctx.emit(&report, formatter)
}
