//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use fnol_engine::TriageConfig;
use std::path::PathBuf;

/// FNOL triage - extract claim attributes from loss notices and route them.
#[derive(Debug, Parser)]
#[command(name = "fnol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Triage configuration file (TOML)
    #[arg(short, long, global = true, env = "FNOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Built-in rule preset, used when no configuration file is given
    #[arg(long, value_enum, global = true, conflicts_with = "config")]
    pub preset: Option<PresetArg>,

    /// Write results as JSON to this file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Print batch statistics and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// Full JSON output records
    Json,
    /// JSON with the four core fields only
    Strict,
}

/// Rule presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetArg {
    /// $25,000 fast track, 50% estimate discrepancy
    Default,
    /// $10,000 fast track, 25% estimate discrepancy
    Strict,
    /// $50,000 fast track, 100% estimate discrepancy
    Lenient,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Triage one or more documents
    Process(ProcessArgs),

    /// Triage every .txt and .pdf document in a folder
    Folder(FolderArgs),

    /// Triage the built-in sample notices
    Sample(SampleArgs),

    /// Inspect, create or check a triage configuration
    Config(ConfigArgs),
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Documents to triage (.txt or .pdf)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the folder command.
#[derive(Debug, Parser)]
pub struct FolderArgs {
    /// Folder containing loss notices
    pub dir: PathBuf,
}

/// Arguments for the sample command.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Also write the sample notices into this folder
    #[arg(short, long)]
    pub write: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective triage configuration as TOML
    Show,

    /// Write a triage configuration file with every default spelled out
    Init {
        /// Destination (defaults to ~/.fnol/triage.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Make the new file the default in ~/.fnol/config.toml
        #[arg(long)]
        settings: bool,
    },

    /// Check a triage configuration file
    Validate {
        /// File to check (defaults to --config or the configured file)
        path: Option<PathBuf>,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Strict => crate::config::OutputFormat::Strict,
        }
    }
}

impl From<PresetArg> for TriageConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => TriageConfig::default(),
            PresetArg::Strict => TriageConfig::strict(),
            PresetArg::Lenient => TriageConfig::lenient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_command() {
        let cli = Cli::parse_from(["fnol", "process", "a.txt", "b.pdf"]);
        match cli.command {
            Command::Process(args) => {
                assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.pdf")]);
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_process_requires_files() {
        assert!(Cli::try_parse_from(["fnol", "process"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "fnol", "folder", "claims", "--format", "strict", "-v", "--output", "out.json",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Strict));
        assert!(cli.verbose);
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(matches!(cli.command, Command::Folder(_)));
    }

    #[test]
    fn test_preset_conflicts_with_config() {
        let result = Cli::try_parse_from([
            "fnol", "sample", "--preset", "strict", "--config", "triage.toml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_init_command() {
        let cli = Cli::parse_from(["fnol", "config", "init", "triage.toml", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { path, force, settings },
            }) => {
                assert_eq!(path, Some(PathBuf::from("triage.toml")));
                assert!(force);
                assert!(!settings);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_preset_conversion() {
        let config: TriageConfig = PresetArg::Strict.into();
        assert_eq!(config, TriageConfig::strict());
    }
}
