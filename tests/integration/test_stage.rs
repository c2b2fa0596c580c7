//! Integration tests for `procpack stage`

use crate::helpers::{TestProject, run_procpack, run_procpack_expect_failure};
use anyhow::Result;
use walkdir::WalkDir;

#[test]
fn test_stage_builds_release_layout() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["stage"])?;

  // Library directory: compiled archive plus dependencies
  assert!(project.file_exists("release/adt/library/adt.jar"));
  assert!(project.file_exists("release/adt/library/core.jar"));
  assert!(project.file_exists("release/adt/library/gluegen-rt.jar"));

  // Assets under the staging root
  assert!(project.file_exists("release/adt/README.md"));
  assert!(project.file_exists("release/adt/library.properties"));
  assert!(project.file_exists("release/adt/examples/Stacks/Stacks.pde"));
  assert!(project.file_exists("release/adt/src/adt/Stack.java"));

  // Repository metadata copy at the release root
  assert!(project.file_exists("release/adt.txt"));

  // Stage stops before the zip
  assert!(!project.file_exists("release/adt.zip"));
  Ok(())
}

#[test]
fn test_stage_drops_excluded_paths() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["stage"])?;

  assert!(!project.file_exists("release/adt/examples/networks"));
  assert!(!project.file_exists("release/adt/examples/.DS_Store"));

  for entry in WalkDir::new(project.path.join("release/adt")) {
    let entry = entry?;
    let name = entry.file_name().to_string_lossy().into_owned();
    assert!(!name.ends_with(".DS_Store"), "OS artifact staged: {}", name);
    assert_ne!(name, "networks", "networks directory staged");
  }
  Ok(())
}

#[test]
fn test_stage_txt_matches_staged_properties() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["stage", "--tag", "v2.0.0"])?;

  let staged = project.read_file("release/adt/library.properties")?;
  let repo_copy = project.read_file("release/adt.txt")?;
  assert_eq!(staged, repo_copy);
  assert!(repo_copy.contains("prettyVersion=2.0.0"));
  Ok(())
}

#[test]
fn test_stage_json_report() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_procpack(&project.path, &["stage", "--json"])?;
  let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(report["library"], "adt");
  assert_eq!(report["version"], "1.2.0");
  assert_eq!(report["state"], "staged");
  assert_eq!(report["dependency_archives"], 2);
  assert!(report.get("archive").is_none());
  assert!(report["staged_files"].as_u64().unwrap() > 3);
  Ok(())
}

#[test]
fn test_stage_resets_previous_run() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["stage"])?;
  project.write_file("release/adt/leftover.txt", "from a previous run")?;

  run_procpack(&project.path, &["stage"])?;
  assert!(!project.file_exists("release/adt/leftover.txt"));
  Ok(())
}

#[test]
fn test_stage_fails_without_compiled_archive() -> Result<()> {
  let project = TestProject::new()?;
  project.remove("build/libs/adt.jar")?;

  let output = run_procpack_expect_failure(&project.path, &["stage"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(stderr.contains("adt.jar"));
  assert_eq!(output.status.code(), Some(2));
  Ok(())
}

#[test]
fn test_stage_fails_on_missing_dependency_path() -> Result<()> {
  let project = TestProject::new()?;
  project.remove("build/deps")?;

  let output = run_procpack_expect_failure(&project.path, &["stage"])?;
  assert!(String::from_utf8_lossy(&output.stderr).contains("build/deps"));
  Ok(())
}

#[test]
fn test_stage_skips_missing_assets() -> Result<()> {
  let project = TestProject::new()?;
  project.remove("src")?;

  run_procpack(&project.path, &["stage"])?;
  assert!(!project.file_exists("release/adt/src"));
  assert!(project.file_exists("release/adt/README.md"));
  Ok(())
}
