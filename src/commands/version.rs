//! Version command implementation

use crate::core::config::PackConfig;
use crate::core::error::PackResult;
use crate::core::metadata::LibraryMetadata;
use crate::core::version::resolve_version;
use std::env;

/// Run the version command: print the resolved release version
pub fn run_version(tag: Option<String>, json: bool) -> PackResult<()> {
  let project_root = env::current_dir()?;
  let config = PackConfig::load(&project_root)?;
  let metadata = LibraryMetadata::load(&project_root.join(&config.library.properties))?;

  let version = resolve_version(tag.as_deref(), &metadata);

  if json {
    let output = serde_json::json!({
      "library": config.library.name,
      "version": version,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
  } else {
    println!("{}", version);
  }

  Ok(())
}
