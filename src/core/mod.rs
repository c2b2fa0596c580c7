//! Core engine for procpack operations
//!
//! This module contains the fundamental building blocks for packaging:
//!
//! - **config**: procpack.toml parsing and validation
//! - **error**: Error types with contextual help messages and exit codes
//! - **properties**: Java-style properties reading and writing
//! - **metadata**: The ten-key library metadata contract
//! - **version**: Release version resolution from tags or metadata
//! - **stage**: Staging-tree assembly (archive, dependencies, assets)
//! - **archive**: Distributable zip output and checksums
//! - **pipeline**: The sequential packaging state machine

pub mod archive;
pub mod config;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod properties;
pub mod stage;
pub mod version;
