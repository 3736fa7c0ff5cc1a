//! FNOL CLI - Command-line interface for the FNOL triage engine.

use clap::Parser;
use fnol_cli::commands::{self, ConfigSource, RunContext};
use fnol_cli::{Cli, Command, Config, Formatter};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Log to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run() -> fnol_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring settings file: {}", e);
        Config::default()
    });

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let source = ConfigSource {
        explicit: cli.config,
        preset: cli.preset.map(Into::into),
        configured: config.settings.triage_config.clone(),
    };

    let context = || RunContext::new(&source, &config, cli.output.clone(), cli.verbose);

    match cli.command {
        Command::Process(args) => {
            commands::execute_process(args, &context()?, &formatter).await?;
        }
        Command::Folder(args) => {
            commands::execute_folder(args, &context()?, &formatter).await?;
        }
        Command::Sample(args) => {
            commands::execute_sample(args, &context()?, &formatter).await?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &source, &formatter)?;
        }
    }

    Ok(())
}
