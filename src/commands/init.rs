//! Init command: scaffold configuration for a library project

use std::env;
use std::io::{self, Write};
use std::path::Path;

use crate::core::config::PackConfig;
use crate::core::error::{PackResult, ResultExt};

const PROPERTIES_TEMPLATE: &str = "\
# Library metadata consumed by the contribution manager.
# version is the integer revision the update check compares;
# prettyVersion is the human-readable release version.
name={name}
version=1
prettyVersion=0.1.0
authors=[Your Name](https://example.org)
url=https://example.org/{name}
categories=Other
sentence=One sentence describing the library.
paragraph=A longer paragraph describing what the library does and who it is for.
minRevision=0
maxRevision=0
";

/// Run the init command to set up procpack configuration
pub fn run_init(name: Option<String>) -> PackResult<()> {
  let project_root = env::current_dir()?;

  // Default the library name to the project directory name
  let lib_name = match name {
    Some(name) => name,
    None => project_root
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| "library".to_string()),
  };

  if PackConfig::exists(&project_root) {
    print!("⚠️  Configuration already exists. Overwrite? [y/N]: ");
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    if !response.trim().eq_ignore_ascii_case("y") {
      println!("Aborted.");
      return Ok(());
    }
  }

  println!("🔧 Scaffolding configuration for library '{}'...", lib_name);

  let config = PackConfig::new(&lib_name);
  config.validate()?;
  config.save(&project_root)?;
  println!("   ✅ procpack.toml");

  scaffold_properties(&project_root, &config, &lib_name)?;

  println!("\n✅ Successfully initialized procpack!");
  println!("\n🚀 Next steps:");
  println!("   1. Fill in release.properties with the real library metadata");
  println!("   2. Build the library so build/libs/{}.jar exists", lib_name);
  println!("   3. Run: procpack package");

  Ok(())
}

/// Write a release.properties template unless one already exists
fn scaffold_properties(project_root: &Path, config: &PackConfig, lib_name: &str) -> PackResult<()> {
  let path = project_root.join(&config.library.properties);
  if path.exists() {
    println!("   (keeping existing {})", config.library.properties.display());
    return Ok(());
  }

  let content = PROPERTIES_TEMPLATE.replace("{name}", lib_name);
  std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  println!("   ✅ {}", config.library.properties.display());
  Ok(())
}
