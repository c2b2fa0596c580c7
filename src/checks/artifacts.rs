//! Artifact path checks

use crate::checks::trait_def::{Check, CheckContext, CheckResult};
use crate::core::config::PackConfig;
use crate::core::error::PackResult;

/// Validates the compiled library archive exists
pub struct CompiledArchiveCheck;

impl Check for CompiledArchiveCheck {
  fn name(&self) -> &str {
    "compiled-archive"
  }

  fn description(&self) -> &str {
    "Validates the compiled library archive is present"
  }

  fn run(&self, ctx: &CheckContext) -> PackResult<CheckResult> {
    let Ok(config) = PackConfig::load(&ctx.project_root) else {
      return Ok(CheckResult::error(
        self.name(),
        "Skipped: configuration not loadable",
        Some("Fix the config-file check first"),
      ));
    };

    let path = ctx
      .project_root
      .join(config.artifacts.archive_path(&config.library.name));
    if path.is_file() {
      Ok(CheckResult::pass(self.name(), format!("Found {}", path.display())))
    } else {
      Ok(CheckResult::error(
        self.name(),
        format!("Compiled archive not found at {}", path.display()),
        Some("Run the project build, or fix [artifacts].archive in procpack.toml"),
      ))
    }
  }
}

/// Validates every configured dependency path exists
pub struct DependencyPathsCheck;

impl Check for DependencyPathsCheck {
  fn name(&self) -> &str {
    "dependency-paths"
  }

  fn description(&self) -> &str {
    "Validates configured runtime dependency paths exist"
  }

  fn run(&self, ctx: &CheckContext) -> PackResult<CheckResult> {
    let Ok(config) = PackConfig::load(&ctx.project_root) else {
      return Ok(CheckResult::error(
        self.name(),
        "Skipped: configuration not loadable",
        Some("Fix the config-file check first"),
      ));
    };

    if config.artifacts.dependencies.is_empty() {
      return Ok(CheckResult::pass(self.name(), "No runtime dependencies configured"));
    }

    let missing: Vec<String> = config
      .artifacts
      .dependencies
      .iter()
      .filter(|p| !ctx.project_root.join(p).exists())
      .map(|p| p.display().to_string())
      .collect();

    if missing.is_empty() {
      Ok(CheckResult::pass(
        self.name(),
        format!("All {} dependency paths exist", config.artifacts.dependencies.len()),
      ))
    } else {
      Ok(CheckResult::error(
        self.name(),
        format!("Missing dependency paths: {}", missing.join(", ")),
        Some("Fix [artifacts].dependencies in procpack.toml"),
      ))
    }
  }
}
