//! Class header scanning.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{ClassFinding, ClassKind};
use crate::source::SourceUnit;

/// `class Name [: inheritance-list] {`, all on one line.
static CLASS_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)class\s+(\w+)(?:\s*:\s*([^{]+))?\s*\{").expect("class header pattern")
});

/// Scans the unit line by line for class headers.
///
/// The inheritance list is kept verbatim (trimmed only). Headers whose
/// opening brace or base list continues on a later line are not found, and
/// a colon followed by nothing but whitespace counts as no inheritance.
pub fn extract_classes(unit: &SourceUnit) -> Vec<ClassFinding> {
    let mut findings = Vec::new();

    for (index, line) in unit.lines.iter().enumerate() {
        if let Some(caps) = CLASS_HEADER.captures(line) {
            let inheritance = caps
                .get(3)
                .map(|m| m.as_str().trim())
                .filter(|text| !text.is_empty())
                .map(str::to_string);
            findings.push(ClassFinding {
                line: index + 1,
                name: caps[2].to_string(),
                inheritance,
                kind: ClassKind::Class,
            });
        }
    }

    findings
}
