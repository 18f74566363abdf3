//! Loading source files into analyzable units.
//!
//! A [`SourceUnit`] fixes the line-splitting semantics every extractor and
//! every reported line number depends on: content is split on `'\n'` with
//! nothing trimmed or normalized. A trailing newline therefore produces a
//! final empty line, empty content is one empty line, and `\r` characters
//! survive inside their lines.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading a source file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {0}")]
    Read(PathBuf, #[source] std::io::Error),
}

/// One loaded source file: identity, raw text, and its line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub content: String,
    pub lines: Vec<String>,
}

impl SourceUnit {
    /// Loads a file from disk, replacing undecodable byte sequences with
    /// U+FFFD instead of failing. A missing path fails before any read.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path).map_err(|e| LoadError::Read(path.to_path_buf(), e))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::from_content(path, content))
    }

    /// Builds a unit from text already in memory, with the same split
    /// semantics as [`SourceUnit::load`].
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = content.split('\n').map(str::to_string).collect();
        Self { path: path.into(), content, lines }
    }

    /// Number of lines in the unit. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
