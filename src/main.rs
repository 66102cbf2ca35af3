//! # linefix
//!
//! `linefix` is a command-line tool with two jobs: turn compiler diagnostic
//! output into structured error records (`linefix extract`), and apply
//! line-level replacements to source files from a JSON fix manifest
//! (`linefix apply`).
//!
//! ## Quick Start
//! ```sh
//! make 2>&1 | linefix extract
//! linefix apply fixes.json
//! ```

use clap::Parser;
use linefix::{
    apply_all, load_manifest, render_entry, write_report, Cli, DiagnosticParser, EntryFormat,
    ParserOptions, Severity,
};
use linefix::cli::Commands;
use std::io;
use std::path::Path;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Extract {
            severities,
            no_column,
            format,
            report,
            no_report,
        } => run_extract(severities, no_column, format, &report, no_report),
        Commands::Apply { manifest } => run_apply(&manifest),
    };
    exit(code);
}

/// Reads compiler output on stdin, prints one delimited entry per extracted
/// record, and writes the JSON report unless suppressed.
fn run_extract(
    severities: Vec<Severity>,
    no_column: bool,
    format: EntryFormat,
    report: &Path,
    no_report: bool,
) -> i32 {
    let parser = DiagnosticParser::new(ParserOptions {
        capture_column: !no_column,
        severities,
    });

    let records = match parser.extract(io::stdin().lock()) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("Failed to read compiler output: {}", err);
            return 1;
        }
    };

    if !no_report {
        if let Err(err) = write_report(&records, report) {
            eprintln!("{:#}", err);
            return 1;
        }
    }

    for record in &records {
        println!("{}", render_entry(record, format));
    }
    0
}

/// Loads the manifest and applies every directive in order. Exit codes:
/// 0 all applied, 1 at least one directive failed, 2 manifest load failure.
fn run_apply(manifest: &Path) -> i32 {
    let fixes = match load_manifest(manifest) {
        Ok(fixes) => fixes,
        Err(err) => {
            eprintln!("{:#}", err);
            return 2;
        }
    };

    let summary = apply_all(&fixes);
    println!("Applied {} of {} fixes", summary.applied, fixes.len());
    if summary.all_applied() {
        0
    } else {
        1
    }
}
