//! Heuristic pattern extractors.
//!
//! Each submodule scans the same [`SourceUnit`](crate::source::SourceUnit)
//! independently and produces one category of findings:
//! - `functions`: qualified function/method definitions
//! - `classes`: single-line class headers
//! - `includes`: include directive lines
//! - `types`: candidate type names from the raw text
//!
//! None of these parses a grammar. A construct the patterns miss is silently
//! absent from the results, never an error, and a line that merely looks
//! like a definition is reported as one.

pub mod classes;
pub mod functions;
pub mod includes;
pub mod types;

pub use classes::extract_classes;
pub use functions::extract_functions;
pub use includes::extract_includes;
pub use types::extract_types;
