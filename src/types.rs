// src/types.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Severity token of a diagnostic line. Compilers emit these lowercase, but
/// the comparison is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    /// Maps a severity token from a diagnostic line to a `Severity`.
    pub fn from_token(token: &str) -> Option<Severity> {
        match token.to_ascii_lowercase().as_str() {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            "note" => Some(Severity::Note),
            _ => None,
        }
    }
}

/// One structured error extracted from compiler output.
///
/// `col` is omitted from the JSON report when the parser is configured not to
/// capture columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    pub file: String,
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
    pub message: String,
}

/// One entry of the fix manifest: replace `line` (1-based) of `file` with
/// `code`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixDirective {
    pub file: String,
    pub line: usize,
    pub code: String,
}
