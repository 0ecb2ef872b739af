//! Config command implementation.
//!
//! Shows the effective run configuration and validates configuration files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use tailrisk_config::RunConfig;

use crate::cli::OutputFormat;
use crate::output::{print_json, print_success};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration (TOML, or JSON with --format json)
    Show(ShowArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments for show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Configuration file to show. Defaults to the built-in reference run.
    #[arg(short, long, env = "TAILRISK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration file to validate
    pub path: PathBuf,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    match args.command {
        ConfigCommand::Show(show_args) => execute_show(show_args, format),
        ConfigCommand::Validate(validate_args) => execute_validate(validate_args, format, quiet),
    }
}

/// Show the effective configuration.
fn execute_show(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let config = match args.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };

    match format {
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Table | OutputFormat::Csv | OutputFormat::Minimal => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

/// Validate a configuration file.
fn execute_validate(args: ValidateArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    RunConfig::from_file(&args.path)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": args.path.display().to_string(),
                "valid": true,
            });
            print_json(&output)?;
        }
        _ if quiet => {}
        _ => print_success(&format!("{} is valid", args.path.display())),
    }

    Ok(())
}
