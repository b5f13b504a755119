//! Destinations for generated documents.

use crate::error::{GenerateError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Receives finished documents keyed by their relative path.
pub trait ArtifactWriter {
    /// Stores one document and returns where it ended up.
    fn write(&mut self, relative: &Path, contents: &str) -> Result<PathBuf>;
}

/// Writes documents below a root directory.
#[derive(Debug, Clone)]
pub struct FsWriter {
    root: PathBuf,
}

impl FsWriter {
    /// Creates a writer rooted at `root`. Directories are created on demand.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactWriter for FsWriter {
    fn write(&mut self, relative: &Path, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        atomic_write(&path, contents)?;
        Ok(path)
    }
}

/// Performs an atomic file write using temp file + rename pattern.
///
/// A reader never sees a half-written configuration.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("kbd.tmp");

    std::fs::write(&temp_path, content).map_err(|source| GenerateError::Write {
        path: temp_path.clone(),
        source,
    })?;

    std::fs::rename(&temp_path, path).map_err(|source| {
        let _ = std::fs::remove_file(&temp_path);
        GenerateError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Keeps documents in memory; used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored documents, sorted by path.
    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    /// Contents stored at a relative path.
    pub fn get(&self, relative: &Path) -> Option<&str> {
        self.files.get(relative).map(String::as_str)
    }
}

impl ArtifactWriter for MemoryWriter {
    fn write(&mut self, relative: &Path, contents: &str) -> Result<PathBuf> {
        self.files
            .insert(relative.to_path_buf(), contents.to_string());
        Ok(relative.to_path_buf())
    }
}
