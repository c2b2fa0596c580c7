//! Integration tests for `procpack init`

use crate::helpers::{TestProject, run_procpack};
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_init_scaffolds_config_and_properties() -> Result<()> {
  let temp = TempDir::new()?;

  run_procpack(temp.path(), &["init", "mylib"])?;

  assert!(temp.path().join("procpack.toml").exists());
  assert!(temp.path().join("release.properties").exists());

  let config = std::fs::read_to_string(temp.path().join("procpack.toml"))?;
  assert!(config.contains("name = \"mylib\""));

  let properties = std::fs::read_to_string(temp.path().join("release.properties"))?;
  assert!(properties.contains("name=mylib"));
  assert!(properties.contains("prettyVersion=0.1.0"));
  Ok(())
}

#[test]
fn test_init_output_feeds_version_command() -> Result<()> {
  let temp = TempDir::new()?;

  run_procpack(temp.path(), &["init", "mylib"])?;
  let output = run_procpack(temp.path(), &["version"])?;

  assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0.1.0");
  Ok(())
}

#[test]
fn test_init_keeps_existing_properties() -> Result<()> {
  let project = TestProject::new()?;
  project.remove("procpack.toml")?;

  run_procpack(&project.path, &["init", "adt"])?;

  // The hand-maintained metadata file must survive scaffolding
  let properties = project.read_file("release.properties")?;
  assert!(properties.contains("prettyVersion=1.2.0"));
  Ok(())
}
