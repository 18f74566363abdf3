//! Include directive scanning.

use crate::source::SourceUnit;

const INCLUDE_MARKER: &str = "#include";

/// Collects include directive lines verbatim (trimmed), in source order,
/// duplicates and all. Angle-bracket and quoted forms are not told apart.
pub fn extract_includes(unit: &SourceUnit) -> Vec<String> {
    unit.lines
        .iter()
        .map(|line| line.trim())
        .filter(|trimmed| trimmed.starts_with(INCLUDE_MARKER))
        .map(str::to_string)
        .collect()
}
