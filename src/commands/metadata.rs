//! Metadata command implementation

use crate::core::config::PackConfig;
use crate::core::error::PackResult;
use crate::core::metadata::{self, LibraryMetadata};
use crate::core::version::resolve_version;
use std::env;

/// Run the metadata command: write library.properties at the project root
pub fn run_metadata(tag: Option<String>) -> PackResult<()> {
  let project_root = env::current_dir()?;
  let config = PackConfig::load(&project_root)?;
  let loaded = LibraryMetadata::load(&project_root.join(&config.library.properties))?;

  let version = resolve_version(tag.as_deref(), &loaded);
  loaded.write(&project_root.join(metadata::OUTPUT_FILE), &version)?;

  println!("✅ Wrote {} (prettyVersion {})", metadata::OUTPUT_FILE, version);

  Ok(())
}
