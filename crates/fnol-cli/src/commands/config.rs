//! Config command implementation.

use super::ConfigSource;
use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use fnol_engine::TriageConfig;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    source: &ConfigSource,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(source, formatter),
        ConfigAction::Init {
            path,
            force,
            settings,
        } => {
            let path = match path {
                Some(path) => path,
                None => Config::default_triage_path()?,
            };
            init_config(source, &path, force, formatter)?;
            if settings {
                let triage = std::fs::canonicalize(&path)?;
                let settings_path = Config::path()?;
                Config::set_triage_config_in(&settings_path, &triage)?;
                println!(
                    "{}",
                    formatter.success(&format!(
                        "{} now uses {}",
                        settings_path.display(),
                        triage.display()
                    ))
                );
            }
            Ok(())
        }
        ConfigAction::Validate { path } => {
            let path = path.or_else(|| source.file().cloned()).ok_or_else(|| {
                CliError::InvalidInput(
                    "No configuration file given; pass a path or --config".to_string(),
                )
            })?;
            validate_config(&path, formatter)
        }
    }
}

/// Print the effective configuration.
fn show_config(source: &ConfigSource, formatter: &Formatter) -> Result<()> {
    let config = source.resolve()?;
    eprintln!("{}", formatter.info(&format!("Source: {}", source.describe())));
    println!("{}", config.to_toml()?);
    Ok(())
}

/// Write a full configuration file.
///
/// Starts from the `--preset` if one was given, otherwise the defaults.
fn init_config(source: &ConfigSource, path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let config = source.preset.clone().unwrap_or_default();
    config.save(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote triage configuration to {}", path.display()))
    );
    Ok(())
}

/// Load and validate a configuration file.
fn validate_config(path: &Path, formatter: &Formatter) -> Result<()> {
    let config = TriageConfig::from_file(path)?;
    config.validate()?;
    println!(
        "{}",
        formatter.success(&format!("{} is a valid triage configuration", path.display()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[test]
    fn test_init_then_validate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("triage.toml");
        let source = ConfigSource {
            preset: Some(TriageConfig::lenient()),
            ..ConfigSource::default()
        };

        init_config(&source, &path, false, &formatter()).unwrap();
        assert_eq!(TriageConfig::from_file(&path).unwrap(), TriageConfig::lenient());
        validate_config(&path, &formatter()).unwrap();
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("triage.toml");
        fs::write(&path, "# mine").unwrap();

        let source = ConfigSource::default();
        assert!(init_config(&source, &path, false, &formatter()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        init_config(&source, &path, true, &formatter()).unwrap();
        assert_eq!(TriageConfig::from_file(&path).unwrap(), TriageConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("triage.toml");
        fs::write(&path, "[routing]\nfast_track_threshold = -1.0\n").unwrap();
        assert!(validate_config(&path, &formatter()).is_err());
    }

    #[test]
    fn test_validate_needs_a_path() {
        let args = ConfigArgs {
            action: ConfigAction::Validate { path: None },
        };
        let err = execute_config(args, &ConfigSource::default(), &formatter()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
