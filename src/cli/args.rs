//! Command-line argument definitions for csvscan
//!
//! This module defines the CLI interface using the clap derive API.

use crate::codegen::is_valid_type_name;
use crate::constants::DEFAULT_RECORD_NAME;
use crate::{Error, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for csvscan
///
/// Generates typed record declarations from sample CSV rows and checks
/// whole files against a guessed schema.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csvscan",
    version,
    about = "Generate typed record declarations from CSV files and check files against them"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print a record declaration guessed from the first rows of a file
    Generate(GenerateArgs),
    /// Decode a whole file against a guessed schema and report the first error
    Check(CheckArgs),
}

/// Arguments for the generate command
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// CSV file to sample
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat the first row as data (field names are generated)
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Name of the generated record type
    #[arg(short = 'n', long = "name", default_value = DEFAULT_RECORD_NAME)]
    pub name: String,

    /// Wrap the declaration in `pub mod <MODULE>`
    #[arg(short = 'm', long = "module", value_name = "MODULE")]
    pub module: Option<String>,
}

impl GenerateArgs {
    pub fn validate(&self) -> Result<()> {
        if !is_valid_type_name(&self.name) {
            return Err(Error::configuration(format!(
                "'{}' is not a valid record type name",
                self.name
            )));
        }
        if let Some(module) = &self.module {
            if !is_valid_type_name(module) {
                return Err(Error::configuration(format!(
                    "'{}' is not a valid module name",
                    module
                )));
            }
        }
        Ok(())
    }
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// CSV file to decode
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat the first row as data instead of a header
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Reject rows that do not have exactly N cells
    #[arg(long = "row-length", value_name = "N")]
    pub row_length: Option<usize>,

    /// Comma-separated column indices to leave unassigned
    #[arg(long = "ignore-columns", value_name = "LIST", value_delimiter = ',')]
    pub ignore_columns: Vec<usize>,

    /// TOML file with reader options; flags override its values
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Log level implied by -v / -q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
