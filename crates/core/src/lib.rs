//! scout-core
//!
//! Core library for heuristic C++ source scanning: loading files into line
//! units, the regex extractors for functions, classes, includes, and type
//! names, report aggregation, console/JSON rendering, and directory-to-text
//! bundling.
//!
//! The scanners are deliberately approximate. They trade correctness on
//! exotic C++ for speed and zero build setup, so results are a review aid,
//! not ground truth.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, editor integrations, etc.).

pub mod analyze;
pub mod bundle;
pub mod extract;
pub mod model;
pub mod render;
pub mod source;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
