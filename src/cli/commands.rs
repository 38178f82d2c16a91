//! Command implementations for the csvscan CLI
//!
//! This module contains the command execution logic, logging setup and
//! user-facing reporting for the CLI interface.

use crate::cli::args::{Args, CheckArgs, Commands, GenerateArgs};
use crate::codegen::{render_module, render_type_declaration};
use crate::config::ReaderConfig;
use crate::constants::LOG_TARGET;
use crate::inference::infer_schema_from_file;
use crate::record::DynamicRecord;
use crate::{DecodeStats, Error, Reader};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use tracing::{debug, info};

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    match &args.command {
        Commands::Generate(generate) => {
            let declaration = generate_declaration(generate)?;
            println!("{}", declaration);
        }
        Commands::Check(check) => {
            let stats = check_file(check)?;
            println!(
                "{} {}",
                "✓".green().bold(),
                format!(
                    "{}: {} records decoded",
                    check.file.display(),
                    stats.records_decoded
                )
                .green()
            );
        }
    }

    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Sample a file and render a record declaration for it
pub fn generate_declaration(args: &GenerateArgs) -> Result<String> {
    args.validate()?;

    let schema_info = infer_schema_from_file(&args.file, !args.no_header)
        .with_context(|| format!("Failed to infer a schema from {}", args.file.display()))?;

    let declaration = render_type_declaration(&args.name, &schema_info.declaration_fields());
    Ok(match &args.module {
        Some(module) => render_module(module, &declaration),
        None => declaration,
    })
}

/// Reader options for the check command: config file first, then flags
pub fn reader_config(args: &CheckArgs) -> Result<ReaderConfig> {
    let mut config = match &args.config {
        Some(path) => ReaderConfig::from_toml_file(path)?,
        None => ReaderConfig::default(),
    };

    config.ignore_header_row = !args.no_header;
    if let Some(length) = args.row_length {
        config.forced_row_length = Some(length);
    }
    config.ignore_columns.extend(args.ignore_columns.iter().copied());

    Ok(config)
}

/// Decode a whole file against a schema guessed from its first rows
pub fn check_file(args: &CheckArgs) -> Result<DecodeStats> {
    let config = reader_config(args)?;
    let schema_info = infer_schema_from_file(&args.file, config.ignore_header_row)
        .with_context(|| format!("Failed to infer a schema from {}", args.file.display()))?;
    let schema = schema_info.to_record_schema();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let reader = Reader::<DynamicRecord>::with_config(config);

    match reader.decode_dynamic_with_stats(&schema, file) {
        Ok((_, stats)) => {
            info!("{}", stats.summary());
            Ok(stats)
        }
        Err(error) => {
            report_decode_error(&error);
            Err(error).with_context(|| format!("Failed to decode {}", args.file.display()))
        }
    }
}

/// Print the position of a decode failure to stderr
fn report_decode_error(error: &Error) {
    let (Some(row), Some(column)) = (error.row(), error.column()) else {
        return;
    };

    eprintln!(
        "{} row {}, column {} ({:?})",
        "✗".red().bold(),
        row.to_string().yellow(),
        column.to_string().yellow(),
        error.kind()
    );
}
