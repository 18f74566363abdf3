//! Console and JSON rendering of analysis reports.
//!
//! Rendering is a pure function of (report, options): nothing here re-scans
//! the source or mutates the report, and sorting or truncation applied for
//! display never reorders the report itself.

use serde::{Deserialize, Serialize};

use crate::model::{AnalysisReport, ClassFinding, FunctionFinding, ReturnTypeGroup};

/// How many function names a summary bucket shows before truncating.
const SUMMARY_DISPLAY_LIMIT: usize = 5;

/// Presentation switches for the console rendering.
///
/// Structured output is a separate entry point ([`render_json`]) and
/// ignores all of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Show the function listing.
    pub functions: bool,
    /// Show the class listing.
    pub classes: bool,
    /// Show the type listing.
    pub types: bool,
    /// Show the by-return-type summary.
    pub summary: bool,
    /// Function and class listings print bare names, one per line, with no
    /// header and no decoration.
    pub names_only: bool,
    /// Sort listings alphabetically instead of keeping source order.
    pub sort: bool,
}

impl RenderOptions {
    /// True when any section switch restricts the default layout.
    fn has_section_filter(&self) -> bool {
        self.functions || self.classes || self.types || self.summary
    }

    /// The function listing shows when asked for explicitly or when no
    /// other section was selected.
    fn shows_functions(&self) -> bool {
        self.functions || !(self.classes || self.types || self.summary)
    }
}

/// Serializes the full report as pretty-printed JSON.
///
/// Field names are the machine contract; nothing else is emitted in
/// structured mode, so the output parses as a single JSON document.
pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Renders the report for the console.
///
/// With no section switches this is the overview block followed by the
/// function listing; each switch selects just its own section, in a fixed
/// functions, classes, types, summary order.
pub fn render_text(report: &AnalysisReport, options: &RenderOptions) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !options.has_section_filter() {
        sections.push(overview_section(report));
    }
    if options.shows_functions() {
        sections.push(function_section(report, options));
    }
    if options.classes {
        sections.push(class_section(report, options));
    }
    if options.types {
        sections.push(type_section(report, options));
    }
    if options.summary {
        sections.push(summary_section(report, options));
    }

    sections.retain(|section| !section.is_empty());
    sections.join("\n\n")
}

fn overview_section(report: &AnalysisReport) -> String {
    format!(
        "File: {}\nLines: {}\nFunctions: {}\nClasses: {}\nTypes: {}\nIncludes: {}",
        report.file,
        report.line_count,
        report.functions.len(),
        report.classes.len(),
        report.types.len(),
        report.includes.len()
    )
}

fn function_section(report: &AnalysisReport, options: &RenderOptions) -> String {
    let mut functions: Vec<&FunctionFinding> = report.functions.iter().collect();
    if options.sort {
        functions.sort_by(|a, b| a.function_name.cmp(&b.function_name));
    }

    if options.names_only {
        return functions
            .iter()
            .map(|f| f.function_name.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut out = String::from("Functions:");
    for function in functions {
        let tag = if function.is_constructor {
            " [ctor]"
        } else if function.is_destructor {
            " [dtor]"
        } else {
            ""
        };
        out.push_str(&format!(
            "\n- {} {}::{}{}",
            function.return_type, function.class_name, function.function_name, tag
        ));
    }
    out
}

fn class_section(report: &AnalysisReport, options: &RenderOptions) -> String {
    let mut classes: Vec<&ClassFinding> = report.classes.iter().collect();
    if options.sort {
        classes.sort_by(|a, b| a.name.cmp(&b.name));
    }

    if options.names_only {
        return classes.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join("\n");
    }

    let mut out = String::from("Classes:");
    for class in classes {
        match &class.inheritance {
            Some(bases) => out.push_str(&format!("\n- {} : {}", class.name, bases)),
            None => out.push_str(&format!("\n- {}", class.name)),
        }
    }
    out
}

fn type_section(report: &AnalysisReport, options: &RenderOptions) -> String {
    let mut types: Vec<&str> = report.types.iter().map(String::as_str).collect();
    if options.sort {
        types.sort_unstable();
    }

    let mut out = String::from("Types:");
    for name in types {
        out.push_str(&format!("\n- {}", name));
    }
    out
}

fn summary_section(report: &AnalysisReport, options: &RenderOptions) -> String {
    let mut groups: Vec<&ReturnTypeGroup> = report.function_summary.groups.iter().collect();
    // The console summary always orders buckets by return type name.
    groups.sort_by(|a, b| a.return_type.cmp(&b.return_type));

    let mut out = String::from("Function summary by return type:");
    for group in groups {
        let mut names: Vec<&str> = group.functions.iter().map(String::as_str).collect();
        if options.sort {
            names.sort_unstable();
        }
        let shown = names
            .iter()
            .take(SUMMARY_DISPLAY_LIMIT)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\n- {} ({}): {}", group.return_type, names.len(), shown));
        if names.len() > SUMMARY_DISPLAY_LIMIT {
            out.push_str(&format!("\n  ... and {} more", names.len() - SUMMARY_DISPLAY_LIMIT));
        }
    }
    out
}
