//! Directory-to-text bundling.
//!
//! Walks a directory tree and concatenates every matching source file into
//! one flat text file of framed blocks, for feeding a whole tree to review
//! tools that want a single document. Shares nothing with the analyzer.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use walkdir::WalkDir;

/// Width of the framing rules around each bundled file.
const RULE_WIDTH: usize = 80;

/// Suffixes bundled unconditionally.
const SOURCE_SUFFIXES: &[&str] = &[".cpp", ".h", ".hpp", ".CMake", ".qml"];
/// Extra suffixes bundled with [`BundleOptions::include_markdown`].
const MARKDOWN_SUFFIXES: &[&str] = &[".md", ".MD", ".markdown", ".MARKDOWN"];
/// Extra suffixes bundled with [`BundleOptions::include_mdc`].
const MDC_SUFFIXES: &[&str] = &[".mdc", ".MDC"];

/// Errors raised while bundling a directory.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("Failed to write {0}")]
    Write(PathBuf, #[source] std::io::Error),
}

/// Switches widening the bundled suffix set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleOptions {
    pub include_markdown: bool,
    pub include_mdc: bool,
}

/// Counters reported after a bundling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleStats {
    /// Files whose content made it into the output.
    pub files_written: usize,
    /// Files framed with an inline read-error marker instead of content.
    pub read_failures: usize,
}

/// True when a file name carries one of the recognized suffixes.
///
/// The test is a case-sensitive suffix match on the name, so `.h` does not
/// match `.H` and the uppercase markdown spellings are listed explicitly.
pub fn is_bundled_name(name: &str, options: &BundleOptions) -> bool {
    if SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return true;
    }
    if options.include_markdown && MARKDOWN_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return true;
    }
    options.include_mdc && MDC_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Walks `root` and writes every matching file into `output` as framed
/// blocks, in a deterministic name-sorted traversal order.
///
/// A file that cannot be read as UTF-8 text is framed with an inline error
/// marker instead of content, so one bad file never aborts the bundle.
/// Directory entries the walk cannot stat are skipped. Only creating or
/// writing the output file itself is fatal.
pub fn bundle_directory(
    root: &Path,
    output: &Path,
    options: &BundleOptions,
) -> Result<BundleStats, BundleError> {
    if !root.is_dir() {
        return Err(BundleError::MissingRoot(root.to_path_buf()));
    }

    let file = fs::File::create(output).map_err(|e| BundleError::Write(output.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);
    let mut stats = BundleStats::default();

    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file());

    for entry in entries {
        let name = entry.file_name().to_string_lossy();
        if !is_bundled_name(&name, options) {
            continue;
        }
        write_block(&mut writer, entry.path(), &mut stats)
            .map_err(|e| BundleError::Write(output.to_path_buf(), e))?;
    }

    writer.flush().map_err(|e| BundleError::Write(output.to_path_buf(), e))?;
    log::debug!(
        "bundled {} files into {} ({} unreadable)",
        stats.files_written,
        output.display(),
        stats.read_failures
    );
    Ok(stats)
}

/// One framed block: a `File:` header line, a dash rule, the content (or a
/// read-error marker), then an equals rule followed by a blank line.
fn write_block(
    writer: &mut impl Write,
    path: &Path,
    stats: &mut BundleStats,
) -> std::io::Result<()> {
    writeln!(writer, "File: {}", path.display())?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    match fs::read_to_string(path) {
        Ok(content) => {
            writer.write_all(content.as_bytes())?;
            stats.files_written += 1;
        }
        Err(error) => {
            writeln!(writer, "[Error reading file: {}]", error)?;
            stats.read_failures += 1;
        }
    }
    writeln!(writer, "\n{}\n", "=".repeat(RULE_WIDTH))?;
    Ok(())
}
