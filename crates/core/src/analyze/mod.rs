//! Analyzer entry points: run every extractor over one source unit and
//! assemble the final report.

use std::path::Path;

use crate::extract::{extract_classes, extract_functions, extract_includes, extract_types};
use crate::model::{AnalysisReport, FunctionSummary};
use crate::source::{LoadError, SourceUnit};

/// Loads a file and analyzes it in one step.
pub fn analyze_path(path: &Path) -> Result<AnalysisReport, LoadError> {
    let unit = SourceUnit::load(path)?;
    Ok(analyze_unit(&unit))
}

/// Runs all four extractors against the same unit and assembles the report.
///
/// The extractors are mutually independent, so the same unit always yields
/// the same report. The `file` field carries the path as given.
pub fn analyze_unit(unit: &SourceUnit) -> AnalysisReport {
    let functions = extract_functions(unit);
    let classes = extract_classes(unit);
    let includes = extract_includes(unit);
    let types = extract_types(unit);

    log::debug!(
        "{}: {} functions, {} classes, {} includes, {} types",
        unit.path.display(),
        functions.len(),
        classes.len(),
        includes.len(),
        types.len()
    );

    let function_summary = FunctionSummary::from_findings(&functions);

    AnalysisReport {
        file: unit.path.display().to_string(),
        line_count: unit.line_count(),
        functions,
        classes,
        includes,
        types,
        function_summary,
    }
}
