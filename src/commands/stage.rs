//! Stage command implementation
//!
//! Runs the pipeline through staging without producing the zip, which is
//! useful for inspecting exactly what a release would ship.

use crate::core::config::PackConfig;
use crate::core::error::PackResult;
use crate::core::pipeline::{PipelineState, ReleasePipeline};
use std::env;

/// Run the stage command: clean, write metadata, and assemble the staging tree
pub fn run_stage(tag: Option<String>, json: bool) -> PackResult<()> {
  let project_root = env::current_dir()?;
  let config = PackConfig::load(&project_root)?;

  if !json {
    println!("📦 Staging release for library {}", config.library.name);
  }

  let mut pipeline = ReleasePipeline::new(&project_root, &config, tag, json);
  let report = pipeline.run_to(PipelineState::Staged)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    println!();
    println!("✅ Staged {} files into {}", report.staged_files, report.release_dir.display());
    println!("   Version:      {}", report.version);
    println!("   Dependencies: {}", report.dependency_archives);
    println!("   Excluded:     {}", report.excluded);
    println!();
    println!("Next: procpack package");
  }

  Ok(())
}
