// src/cli.rs
use crate::diag::EntryFormat;
use crate::types::Severity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract compiler errors from build output and apply line-level fixes to source files.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read compiler output on stdin and emit structured error records.
    Extract {
        /// Severities to keep, comma separated.
        #[arg(long, value_enum, value_delimiter = ',', default_value = "error")]
        severities: Vec<Severity>,

        /// Drop the column field from emitted records.
        #[arg(long)]
        no_column: bool,

        /// Delimiter scheme for the stdout entries.
        #[arg(long, value_enum, default_value = "pipe")]
        format: EntryFormat,

        /// Where to write the JSON error report.
        #[arg(long, default_value = "build_errors.json")]
        report: PathBuf,

        /// Skip writing the JSON error report.
        #[arg(long)]
        no_report: bool,
    },

    /// Apply line fixes from a JSON manifest to the files it names.
    Apply {
        /// Path to the fix manifest.
        #[arg(default_value = "fixes.json")]
        manifest: PathBuf,
    },
}
