// src/apply.rs
use crate::types::FixDirective;
use anyhow::{anyhow, Context};
use std::fs;
use tracing::debug;

/// Replaces line `line_no` (1-based) of `content` with `code`, trimmed and
/// terminated by a single newline. Untouched lines keep their original
/// terminators. Returns `None` when `line_no` is outside
/// `[1, total_lines]`.
///
/// # Example
/// ```
/// use linefix::apply::replace_line;
///
/// let updated = replace_line("a\nb\nc\n", 2, "B").unwrap();
/// assert_eq!(updated, "a\nB\nc\n");
/// ```
pub fn replace_line(content: &str, line_no: usize, code: &str) -> Option<String> {
    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();
    if line_no == 0 || line_no > lines.len() {
        return None;
    }
    let replacement = format!("{}\n", code.trim());
    lines[line_no - 1] = &replacement;
    Some(lines.concat())
}

/// Applies a single fix directive: fresh read of the target file, in-memory
/// replacement, write back. Any failure carries enough context to name the
/// offending file and line.
pub fn apply_directive(fix: &FixDirective) -> anyhow::Result<()> {
    let contents = fs::read_to_string(&fix.file)
        .with_context(|| format!("failed to read {}", fix.file))?;
    let updated = replace_line(&contents, fix.line, &fix.code).ok_or_else(|| {
        anyhow!(
            "line {} is out of range for {} ({} lines)",
            fix.line,
            fix.file,
            contents.split_inclusive('\n').count()
        )
    })?;
    fs::write(&fix.file, updated)
        .with_context(|| format!("failed to write {}", fix.file))?;
    debug!("applied fix to {} line {}", fix.file, fix.line);
    Ok(())
}

/// Outcome of an `apply_all` run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub applied: usize,
    pub failed: usize,
}

impl ApplySummary {
    pub fn all_applied(&self) -> bool {
        self.failed == 0
    }
}

/// Applies the directives strictly in input order. Each directive re-reads
/// its file, so several directives against the same file compose. A failed
/// directive is reported to stderr and skipped; the remaining directives are
/// still attempted.
pub fn apply_all(fixes: &[FixDirective]) -> ApplySummary {
    let mut summary = ApplySummary::default();
    for fix in fixes {
        match apply_directive(fix) {
            Ok(()) => summary.applied += 1,
            Err(err) => {
                eprintln!(
                    "Failed to apply fix to {} line {}: {:#}",
                    fix.file, fix.line, err
                );
                summary.failed += 1;
            }
        }
    }
    summary
}
