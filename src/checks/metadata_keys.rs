//! Metadata key-set check

use crate::checks::trait_def::{Check, CheckContext, CheckResult};
use crate::core::config::PackConfig;
use crate::core::error::PackResult;
use crate::core::metadata::{LibraryMetadata, REQUIRED_KEYS};

/// Validates the properties input carries all ten required keys
pub struct MetadataKeysCheck;

impl Check for MetadataKeysCheck {
  fn name(&self) -> &str {
    "metadata-keys"
  }

  fn description(&self) -> &str {
    "Validates the library properties file and its required keys"
  }

  fn run(&self, ctx: &CheckContext) -> PackResult<CheckResult> {
    let Ok(config) = PackConfig::load(&ctx.project_root) else {
      return Ok(CheckResult::error(
        self.name(),
        "Skipped: configuration not loadable",
        Some("Fix the config-file check first"),
      ));
    };

    let path = ctx.project_root.join(&config.library.properties);
    match LibraryMetadata::load(&path) {
      Ok(metadata) => Ok(CheckResult::pass(
        self.name(),
        format!(
          "{} has all {} required keys (prettyVersion {})",
          path.display(),
          REQUIRED_KEYS.len(),
          metadata.pretty_version
        ),
      )),
      Err(e) => Ok(CheckResult::error(self.name(), e.to_string(), e.help_message())),
    }
  }
}
