//! Function and method definition scanning.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::FunctionFinding;
use crate::source::SourceUnit;

/// Used when no return type can be isolated from the text before the
/// qualifier, including constructors and destructors.
const FALLBACK_RETURN_TYPE: &str = "void";

/// Definition shapes tried in order; the first match gates the line and a
/// line contributes at most one finding.
static DEFINITION_SHAPES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // return_type Class::method(params) [const] [{]
        Regex::new(r"^(\s*)([\w:<>*&\s]+)\s+(\w+)::(\w+)\s*\([^)]*\)\s*(?:const)?\s*\{?")
            .expect("method shape pattern"),
        // Class::Class(params) and Class::~Class(params)
        Regex::new(r"^(\s*)(\w+)::(~?\w+)\s*\([^)]*\)\s*\{?").expect("ctor/dtor shape pattern"),
        // template<...> return_type Class::method(params) on one line
        Regex::new(r"^(\s*)(template\s*<[^>]*>\s*)?(\w+)\s+(\w+)::(\w+)\s*\([^)]*\)\s*\{?")
            .expect("template shape pattern"),
    ]
});

/// Narrow return-type recovery: one identifier token with an optional
/// pointer or reference marker, then the class token. Qualified and
/// templated return types deliberately miss and fall back to the
/// placeholder.
static RETURN_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\w+(?:\s*\*|\s*&)?)\s+\w+$").expect("return type pattern"));

/// Scans the unit line by line for qualified definitions.
///
/// Lines whose trimmed form starts with `//` or `#` are never considered.
/// For the rest, the shape patterns only gate the line; the fields are
/// recovered uniformly by splitting on the `::` qualifier, so overlapping
/// shapes cannot produce conflicting records. Signatures spread across
/// multiple physical lines are not found.
pub fn extract_functions(unit: &SourceUnit) -> Vec<FunctionFinding> {
    let mut findings = Vec::new();

    for (index, line) in unit.lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with('#') {
            continue;
        }
        // First shape wins; `any` short-circuits in declaration order.
        if !DEFINITION_SHAPES.iter().any(|shape| shape.is_match(line)) {
            continue;
        }
        if let Some(finding) = finding_from_line(index + 1, line) {
            findings.push(finding);
        }
    }

    findings
}

/// Recovers the finding fields from a line already gated by a shape.
///
/// The enclosing type is the last whitespace-separated token before the
/// first `::`; the member name is the second `::` segment up to its
/// parameter list. A line with no `::` yields nothing, but the shapes make
/// that unreachable.
fn finding_from_line(line_number: usize, line: &str) -> Option<FunctionFinding> {
    let mut segments = line.splitn(3, "::");
    let head = segments.next()?;
    let second = segments.next()?;

    let class_name = head.split_whitespace().last()?;
    let name_part = match second.find('(') {
        Some(open) => &second[..open],
        None => second,
    };
    let return_type = recover_return_type(head.trim());

    Some(FunctionFinding::new(
        line_number,
        return_type,
        class_name,
        name_part.trim(),
        line.trim(),
    ))
}

fn recover_return_type(before_qualifier: &str) -> String {
    RETURN_TYPE
        .captures(before_qualifier)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_RETURN_TYPE.to_string())
}
