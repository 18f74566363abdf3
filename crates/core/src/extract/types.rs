//! Type name scanning over the raw file text.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::source::SourceUnit;

/// Independent type-name shapes; every capture group of every match feeds
/// the candidate set. The smart-pointer and container shapes record the
/// element type, not the wrapper.
static TYPE_SHAPES: Lazy<[Regex; 6]> = Lazy::new(|| {
    [
        Regex::new(r"\b(Q\w+)\b").expect("framework type pattern"),
        Regex::new(r"\b([A-Z]\w*::\w+)\b").expect("qualified type pattern"),
        Regex::new(r"\b(std::\w+)\b").expect("std type pattern"),
        Regex::new(r"\bstd::shared_ptr<(\w+)>").expect("shared_ptr element pattern"),
        Regex::new(r"\bstd::unique_ptr<(\w+)>").expect("unique_ptr element pattern"),
        Regex::new(r"\bstd::vector<(\w+)>").expect("vector element pattern"),
    ]
});

/// Collects candidate type names from the unit's full content.
///
/// The scan is textual, so occurrences inside comments and string literals
/// count too. Results are deduplicated and alphabetically sorted.
pub fn extract_types(unit: &SourceUnit) -> Vec<String> {
    let mut names = BTreeSet::new();
    for shape in TYPE_SHAPES.iter() {
        for caps in shape.captures_iter(&unit.content) {
            for group in caps.iter().skip(1).flatten() {
                names.insert(group.as_str().to_string());
            }
        }
    }
    names.into_iter().collect()
}
