//! Configuration file check

use crate::checks::trait_def::{Check, CheckContext, CheckResult};
use crate::core::config::PackConfig;
use crate::core::error::PackResult;

/// Validates that procpack.toml exists, parses, and passes validation
pub struct ConfigFileCheck;

impl Check for ConfigFileCheck {
  fn name(&self) -> &str {
    "config-file"
  }

  fn description(&self) -> &str {
    "Validates procpack.toml presence and contents"
  }

  fn run(&self, ctx: &CheckContext) -> PackResult<CheckResult> {
    if !PackConfig::exists(&ctx.project_root) {
      return Ok(CheckResult::error(
        self.name(),
        "No procpack.toml found",
        Some("Run `procpack init` to create one"),
      ));
    }

    match PackConfig::load(&ctx.project_root) {
      Ok(config) => Ok(CheckResult::pass(
        self.name(),
        format!("Configuration valid (library '{}')", config.library.name),
      )),
      Err(e) => Ok(CheckResult::error(
        self.name(),
        format!("Configuration failed to load: {}", e),
        e.help_message(),
      )),
    }
  }
}
