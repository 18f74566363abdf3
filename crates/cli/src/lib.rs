//! Shared library for the `cpp-scout` and `cpp-bundle` binaries.
//!
//! The binaries are thin argument parsers; the command handlers live here
//! so they can be tested directly and reused from other frontends.

pub mod commands;
