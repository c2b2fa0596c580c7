//! Integration tests for `procpack metadata`

use crate::helpers::{TestProject, run_procpack};
use anyhow::Result;

const REQUIRED_KEYS: [&str; 10] = [
  "name",
  "version",
  "prettyVersion",
  "authors",
  "url",
  "categories",
  "sentence",
  "paragraph",
  "minRevision",
  "maxRevision",
];

fn parse_properties(content: &str) -> Vec<(String, String)> {
  content
    .lines()
    .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
    .filter_map(|l| l.split_once('='))
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn test_metadata_writes_exactly_ten_keys() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["metadata"])?;

  let written = project.read_file("library.properties")?;
  let pairs = parse_properties(&written);

  let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
  assert_eq!(keys, REQUIRED_KEYS.to_vec());
  Ok(())
}

#[test]
fn test_metadata_passes_nine_values_verbatim() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["metadata"])?;

  let written = project.read_file("library.properties")?;
  let pairs = parse_properties(&written);
  let get = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

  // version stays the integer revision; prettyVersion is the resolved version
  assert_eq!(get("version"), Some("3"));
  assert_eq!(get("prettyVersion"), Some("1.2.0"));
  assert_eq!(get("authors"), Some("[Jane Doe](https://example.org)"));
  assert_eq!(get("minRevision"), Some("228"));
  assert_eq!(get("maxRevision"), Some("0"));
  Ok(())
}

#[test]
fn test_metadata_uses_resolved_tag() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["metadata", "--tag", "v2.0.0"])?;

  let written = project.read_file("library.properties")?;
  assert!(written.contains("prettyVersion=2.0.0"));
  assert!(written.contains("version=3"));
  Ok(())
}

#[test]
fn test_metadata_overwrites_previous_output() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("library.properties", "stale=true\n")?;

  run_procpack(&project.path, &["metadata"])?;

  let written = project.read_file("library.properties")?;
  assert!(!written.contains("stale"));
  Ok(())
}
