//! CLI commands for procpack
//!
//! This module contains all user-facing command implementations:
//!
//! ## Setup & Inspection
//! - **init**: Scaffold procpack.toml and a release.properties template
//! - **doctor**: Run health checks over config, metadata, and artifacts
//! - **version**: Print the resolved release version
//!
//! ## Packaging
//! - **metadata**: Write library.properties with the resolved version
//! - **stage**: Clean and assemble the release staging tree
//! - **package**: Full pipeline: stage, zip, and checksum

pub mod doctor;
pub mod init;
pub mod metadata;
pub mod package;
pub mod stage;
pub mod version;

pub use doctor::run_doctor;
pub use init::run_init;
pub use metadata::run_metadata;
pub use package::run_package;
pub use stage::run_stage;
pub use version::run_version;
