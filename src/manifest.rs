// src/manifest.rs
use crate::types::FixDirective;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Loads the fix manifest: a JSON array of `{file, line, code}` objects.
///
/// A missing or malformed manifest is a whole-run failure; no target file is
/// touched before the manifest loads cleanly.
pub fn load_manifest(path: &Path) -> anyhow::Result<Vec<FixDirective>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read fix manifest {}", path.display()))?;
    let fixes: Vec<FixDirective> = serde_json::from_str(&contents)
        .with_context(|| format!("fix manifest {} is not valid JSON", path.display()))?;
    Ok(fixes)
}
