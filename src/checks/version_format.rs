//! Version format check
//!
//! The resolver itself never validates version strings (malformed tags
//! propagate by contract), so this is the one place a suspicious version
//! gets flagged, and only as a warning.

use crate::checks::trait_def::{Check, CheckContext, CheckResult};
use crate::core::config::PackConfig;
use crate::core::error::PackResult;
use crate::core::metadata::LibraryMetadata;
use crate::core::version::resolve_version;

/// Warns when the resolved version is not a semantic version
pub struct VersionFormatCheck;

impl Check for VersionFormatCheck {
  fn name(&self) -> &str {
    "version-format"
  }

  fn description(&self) -> &str {
    "Warns when the resolved release version is not semver"
  }

  fn run(&self, ctx: &CheckContext) -> PackResult<CheckResult> {
    let Ok(config) = PackConfig::load(&ctx.project_root) else {
      return Ok(CheckResult::error(
        self.name(),
        "Skipped: configuration not loadable",
        Some("Fix the config-file check first"),
      ));
    };

    let Ok(metadata) = LibraryMetadata::load(&ctx.project_root.join(&config.library.properties)) else {
      return Ok(CheckResult::error(
        self.name(),
        "Skipped: metadata not loadable",
        Some("Fix the metadata-keys check first"),
      ));
    };

    let version = resolve_version(ctx.tag.as_deref(), &metadata);
    match semver::Version::parse(&version) {
      Ok(_) => Ok(CheckResult::pass(self.name(), format!("Resolved version {} is semver", version))),
      Err(_) => Ok(CheckResult::warning(
        self.name(),
        format!("Resolved version '{}' is not a semantic version", version),
        Some("Use MAJOR.MINOR.PATCH so update tooling can compare releases"),
      )),
    }
  }
}
