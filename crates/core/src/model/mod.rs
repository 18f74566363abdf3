//! Core data model for scan findings and reports.
//!
//! Everything here is a plain serde-serializable record:
//! - Function/method findings recovered from definition-shaped lines
//! - Class findings recovered from single-line class headers
//! - The by-return-type function summary
//! - The aggregate report assembled by the analyzer
//!
//! Field names on [`AnalysisReport`] and its children are the stable
//! structured-output contract; renaming one is a breaking change.

use serde::{Deserialize, Serialize};

/// One putative function or method definition recovered from a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionFinding {
    /// 1-indexed line the definition shape matched on.
    pub line: usize,
    /// Declared return type, or `"void"` when none could be isolated.
    pub return_type: String,
    /// Enclosing type token (the `Foo` in `Foo::bar`).
    pub class_name: String,
    /// Member name (the `bar` in `Foo::bar`), `~`-prefixed for destructors.
    pub function_name: String,
    /// The matched line with surrounding whitespace trimmed.
    pub signature: String,
    pub is_constructor: bool,
    pub is_destructor: bool,
}

impl FunctionFinding {
    /// Builds a finding, deriving the constructor/destructor flags from the
    /// names. The flags are never both true: a constructor name equals the
    /// class token and class tokens cannot start with `~`.
    pub fn new(
        line: usize,
        return_type: impl Into<String>,
        class_name: impl Into<String>,
        function_name: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        let class_name = class_name.into();
        let function_name = function_name.into();
        let is_constructor = function_name == class_name;
        let is_destructor = function_name.starts_with('~');
        Self {
            line,
            return_type: return_type.into(),
            class_name,
            function_name,
            signature: signature.into(),
            is_constructor,
            is_destructor,
        }
    }
}

/// Declaration kind of a class-like finding.
///
/// Only `Class` is produced today; the other variants reserve the tag
/// namespace for struct and interface scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Struct,
    Interface,
}

/// One class header recovered from a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFinding {
    /// 1-indexed line the header matched on.
    pub line: usize,
    pub name: String,
    /// Verbatim inheritance-list text, trimmed, never decomposed into base
    /// names. `None` when the header carries no inheritance clause.
    pub inheritance: Option<String>,
    #[serde(rename = "type")]
    pub kind: ClassKind,
}

/// Function names sharing one declared return type, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnTypeGroup {
    pub return_type: String,
    pub functions: Vec<String>,
}

/// Function findings bucketed by return type.
///
/// Buckets appear in the order each return type was first seen and names
/// keep source order within a bucket, so rebuilding the summary from the
/// same findings is byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionSummary {
    pub groups: Vec<ReturnTypeGroup>,
}

impl FunctionSummary {
    /// Buckets findings by declared return type.
    pub fn from_findings(findings: &[FunctionFinding]) -> Self {
        let mut groups: Vec<ReturnTypeGroup> = Vec::new();
        for finding in findings {
            match groups.iter_mut().find(|g| g.return_type == finding.return_type) {
                Some(group) => group.functions.push(finding.function_name.clone()),
                None => groups.push(ReturnTypeGroup {
                    return_type: finding.return_type.clone(),
                    functions: vec![finding.function_name.clone()],
                }),
            }
        }
        Self { groups }
    }

    /// Looks up the bucket for a return type, if any finding declared it.
    pub fn group(&self, return_type: &str) -> Option<&ReturnTypeGroup> {
        self.groups.iter().find(|g| g.return_type == return_type)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The aggregate produced by one analyzer run over one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The analyzed path as given, not canonicalized.
    pub file: String,
    pub line_count: usize,
    pub functions: Vec<FunctionFinding>,
    pub classes: Vec<ClassFinding>,
    pub includes: Vec<String>,
    /// Candidate type names, deduplicated and alphabetically sorted.
    pub types: Vec<String>,
    pub function_summary: FunctionSummary,
}
