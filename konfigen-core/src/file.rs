//! Generated files and the rules for writing them.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::Context;

/// Behavior when the target path already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace the existing file.
    Always,
    /// Keep the existing file untouched.
    IfMissing,
}

/// Rules governing how a generated file lands on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// Outcome of a [`GeneratedFile::write`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    Skipped,
}

/// A file a generator knows how to produce.
///
/// Implementors describe where the file lives relative to an output base,
/// when it may be overwritten, and how to render its contents. The provided
/// [`write`](Self::write) method ties those together.
pub trait GeneratedFile {
    /// Target path of this file under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    /// Renders the full file contents.
    fn render(&self) -> String;

    fn write(&self, base: &Path) -> eyre::Result<WriteResult> {
        let path = self.path(base);
        if self.rules().overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(&path, &self.render())?;
        Ok(WriteResult::Written)
    }
}

/// A generated file with fixed contents, for cases that need no rendering
/// logic of their own.
pub struct File {
    relative_path: PathBuf,
    contents: String,
    rules: FileRules,
}

impl File {
    pub fn new(relative_path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents: contents.into(),
            rules: FileRules::always_overwrite(),
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.rules.overwrite = overwrite;
        self
    }
}

impl GeneratedFile for File {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative_path)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        self.contents.clone()
    }
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, contents: &str) -> eyre::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).wrap_err_with(|| format!("failed to write {}", path.display()))
}
