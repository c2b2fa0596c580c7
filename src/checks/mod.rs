//! Health checks and validation infrastructure
//!
//! This module provides a unified interface for running health checks.
//! All checks implement the `Check` trait, making it easy to add new
//! checks without modifying core logic.
//!
//! # Built-in Checks
//!
//! - **config-file**: procpack.toml presence, parse, and validation
//! - **metadata-keys**: properties input carries all ten required keys
//! - **compiled-archive**: the built library archive exists
//! - **dependency-paths**: configured dependency paths exist
//! - **version-format**: resolved version parses as semver (warning only)

mod artifacts;
mod config_file;
mod metadata_keys;
mod runner;
mod trait_def;
mod version_format;

// Re-export public API
pub use runner::create_default_runner;
pub use trait_def::{CheckContext, Severity};

// Individual checks are not exported - they're registered in create_default_runner()
// This keeps the API simple and prevents misuse
