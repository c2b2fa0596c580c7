//! Check runner: executes all registered checks in order

use crate::checks::artifacts::{CompiledArchiveCheck, DependencyPathsCheck};
use crate::checks::config_file::ConfigFileCheck;
use crate::checks::metadata_keys::MetadataKeysCheck;
use crate::checks::trait_def::{Check, CheckContext, CheckResult};
use crate::checks::version_format::VersionFormatCheck;
use crate::core::error::PackResult;

/// Runs a fixed set of checks and collects their results
pub struct CheckRunner {
  checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
  /// Registered checks, in execution order
  pub fn checks(&self) -> &[Box<dyn Check>] {
    &self.checks
  }

  /// Run every check, collecting results (a failing check is a result,
  /// not an error; only infrastructure failures propagate)
  pub fn run_all(&self, ctx: &CheckContext) -> PackResult<Vec<CheckResult>> {
    let mut results = Vec::with_capacity(self.checks.len());
    for check in &self.checks {
      results.push(check.run(ctx)?);
    }
    Ok(results)
  }
}

/// Create the default runner with all built-in checks
pub fn create_default_runner() -> CheckRunner {
  CheckRunner {
    checks: vec![
      Box::new(ConfigFileCheck),
      Box::new(MetadataKeysCheck),
      Box::new(CompiledArchiveCheck),
      Box::new(DependencyPathsCheck),
      Box::new(VersionFormatCheck),
    ],
  }
}
