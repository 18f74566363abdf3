use std::path::Path;

use anyhow::{Context, Result};
use scout_core::bundle::{bundle_directory, BundleOptions};

/// Walk a directory and write the framed bundle, then report counts.
pub fn bundle_command(directory: &Path, output: &Path, options: &BundleOptions) -> Result<()> {
    let stats = bundle_directory(directory, output, options)
        .with_context(|| format!("Failed to bundle {}", directory.display()))?;

    println!(
        "Bundled {} files into {} ({} unreadable)",
        stats.files_written,
        output.display(),
        stats.read_failures
    );

    Ok(())
}
