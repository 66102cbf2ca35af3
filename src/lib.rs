#![doc = include_str!("../README.md")]

pub mod types;
pub use types::{DiagnosticRecord, FixDirective, Severity};
pub mod diag;
pub use diag::{render_entry, write_report, DiagnosticParser, EntryFormat, ParserOptions};
pub mod manifest;
pub use manifest::load_manifest;
pub mod apply;
pub use apply::{apply_all, apply_directive, replace_line, ApplySummary};
pub mod cli;
pub use cli::Cli;
