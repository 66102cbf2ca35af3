#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A wrapper around a temporary project directory holding source files and
/// a fix manifest.
pub struct TestProject {
    /// The temporary directory. When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    /// The root directory for the generated project.
    pub root: PathBuf,
}

impl TestProject {
    /// Create a new empty project directory.
    pub fn new(project_name: &str) -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().join(project_name);
        fs::create_dir_all(&root)?;
        Ok(TestProject { temp_dir, root })
    }

    /// Returns a reference to the project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write a source file under the project root and return its path.
    pub fn write_source(&self, name: &str, contents: &str) -> IoResult<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a fix manifest (`fixes.json` unless another name is given) from
    /// a list of (file, line, code) triples.
    pub fn write_manifest(&self, name: &str, fixes: &[(&str, u64, &str)]) -> IoResult<PathBuf> {
        let entries: Vec<serde_json::Value> = fixes
            .iter()
            .map(|(file, line, code)| {
                serde_json::json!({ "file": file, "line": line, "code": code })
            })
            .collect();
        let path = self.root.join(name);
        fs::write(&path, serde_json::Value::Array(entries).to_string())?;
        Ok(path)
    }

    /// Read a project file back as a string.
    pub fn read(&self, name: &str) -> IoResult<String> {
        fs::read_to_string(self.root.join(name))
    }
}
