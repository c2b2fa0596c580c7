//! Package command implementation
//!
//! The full release pipeline: clean, verify the compiled archive, write
//! metadata, assemble the staging tree, zip it, and write the checksum.

use crate::core::config::PackConfig;
use crate::core::error::PackResult;
use crate::core::pipeline::ReleasePipeline;
use std::env;

/// Run the package command: produce the distributable release
pub fn run_package(tag: Option<String>, json: bool) -> PackResult<()> {
  let project_root = env::current_dir()?;
  let config = PackConfig::load(&project_root)?;

  if !json {
    println!("📦 Releasing library {}", config.library.name);
  }

  let mut pipeline = ReleasePipeline::new(&project_root, &config, tag, json);
  let report = pipeline.run()?;

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
    return Ok(());
  }

  println!();
  println!("✅ Release {} packaged!", report.version);
  println!("   Staged files: {}", report.staged_files);
  println!("   Dependencies: {}", report.dependency_archives);
  println!("   Excluded:     {}", report.excluded);
  if let Some(archive) = &report.archive {
    println!("   Archive:      {}", archive.display());
  }
  if let Some(sha256) = &report.archive_sha256 {
    println!("   SHA-256:      {}", sha256);
  }
  println!();
  println!("Next steps:");
  println!("   Upload the zip and the {}.txt index file to your release host", report.library);
  println!("   Point the contribution manager at the published URL");

  Ok(())
}
