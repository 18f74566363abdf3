use std::path::Path;

use anyhow::{Context, Result};
use scout_core::analyze::analyze_path;
use scout_core::render::{render_json, render_text, RenderOptions};

/// Analyze one file and print the selected rendering to stdout.
///
/// `json` wins over every console switch: structured mode emits the full
/// report and nothing else. Console mode prints nothing when the selected
/// listing came out empty.
pub fn scan_command(file: &Path, json: bool, render: &RenderOptions) -> Result<()> {
    let report = analyze_path(file)
        .with_context(|| format!("Failed to analyze {}", file.display()))?;

    if json {
        let serialized = render_json(&report).context("Failed to serialize report to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    let rendered = render_text(&report, render);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(())
}
