// src/diag.rs
use crate::types::{DiagnosticRecord, Severity};
use anyhow::Context;
use clap::ValueEnum;
use regex::Regex;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::debug;

/// The canonical diagnostic shape: `file:line:col: severity: message`.
/// The file prefix is non-greedy so the first `:digits:digits:` run wins,
/// and the severity token match is case-insensitive.
const DIAGNOSTIC_PATTERN: &str =
    r"(?P<file>.*?):(?P<line>\d+):(?P<col>\d+):\s*(?P<sev>(?i:error|warning|note)):\s*(?P<msg>.*)";

/// Configuration for [`DiagnosticParser`].
///
/// The defaults keep only `error` lines and carry the column through to the
/// record; `capture_column: false` still requires a column in the input but
/// drops it from the output.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    pub capture_column: bool,
    pub severities: Vec<Severity>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            capture_column: true,
            severities: vec![Severity::Error],
        }
    }
}

/// Line-oriented parser for compiler diagnostic output.
pub struct DiagnosticParser {
    pattern: Regex,
    options: ParserOptions,
}

impl DiagnosticParser {
    pub fn new(options: ParserOptions) -> DiagnosticParser {
        // The pattern is a literal; compiling it cannot fail.
        let pattern = Regex::new(DIAGNOSTIC_PATTERN).expect("diagnostic pattern compiles");
        DiagnosticParser { pattern, options }
    }

    /// Parses one line of compiler output into a [`DiagnosticRecord`].
    ///
    /// Returns `None` for lines that do not match the diagnostic shape and
    /// for lines whose severity is not in the accepted set.
    ///
    /// # Example
    /// ```
    /// use linefix::diag::{DiagnosticParser, ParserOptions};
    ///
    /// let parser = DiagnosticParser::new(ParserOptions::default());
    /// let record = parser
    ///     .parse_line("src/main.c:10:3: error: missing semicolon")
    ///     .unwrap();
    /// assert_eq!(record.file, "src/main.c");
    /// assert_eq!(record.line, 10);
    /// assert_eq!(record.col, Some(3));
    /// assert_eq!(record.message, "missing semicolon");
    /// ```
    pub fn parse_line(&self, line: &str) -> Option<DiagnosticRecord> {
        let caps = self.pattern.captures(line)?;
        let severity = Severity::from_token(&caps["sev"])?;
        if !self.options.severities.contains(&severity) {
            return None;
        }
        // The groups are digit runs; a parse failure can only mean the run
        // overflows the integer, which drops the line.
        let line_no: u32 = caps["line"].parse().ok()?;
        let col = if self.options.capture_column {
            Some(caps["col"].parse().ok()?)
        } else {
            None
        };
        Some(DiagnosticRecord {
            file: caps["file"].trim().to_string(),
            line: line_no,
            col,
            message: caps["msg"].trim().to_string(),
        })
    }

    /// Reads the whole stream and returns the matching records in input
    /// order. Non-matching lines are skipped silently.
    pub fn extract<R: BufRead>(&self, reader: R) -> io::Result<Vec<DiagnosticRecord>> {
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(record) = self.parse_line(&line) {
                records.push(record);
            }
        }
        debug!("extracted {} diagnostic records", records.len());
        Ok(records)
    }
}

/// The stdout delimiter scheme for extracted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryFormat {
    /// `file||line||col||message`
    Pipe,
    /// `ERROR_ENTRY::file::line::col::message`
    Tagged,
}

/// Renders one record as a delimited stdout line. The column field is left
/// out entirely when the record carries no column.
pub fn render_entry(record: &DiagnosticRecord, format: EntryFormat) -> String {
    match (format, record.col) {
        (EntryFormat::Pipe, Some(col)) => {
            format!("{}||{}||{}||{}", record.file, record.line, col, record.message)
        }
        (EntryFormat::Pipe, None) => {
            format!("{}||{}||{}", record.file, record.line, record.message)
        }
        (EntryFormat::Tagged, Some(col)) => format!(
            "ERROR_ENTRY::{}::{}::{}::{}",
            record.file, record.line, col, record.message
        ),
        (EntryFormat::Tagged, None) => format!(
            "ERROR_ENTRY::{}::{}::{}",
            record.file, record.line, record.message
        ),
    }
}

/// Writes the records as a pretty-printed JSON array to `path`.
pub fn write_report(records: &[DiagnosticRecord], path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write error report to {}", path.display()))?;
    Ok(())
}
