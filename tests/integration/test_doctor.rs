//! Integration tests for `procpack doctor`

use crate::helpers::{TestProject, run_procpack, run_procpack_expect_failure};
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_doctor_passes_on_healthy_project() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_procpack(&project.path, &["doctor"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("5/5 checks passed"));
  Ok(())
}

#[test]
fn test_doctor_fails_on_empty_project() -> Result<()> {
  let temp = TempDir::new()?;

  let output = run_procpack_expect_failure(temp.path(), &["doctor"])?;
  assert_eq!(output.status.code(), Some(3));

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("config-file"));
  Ok(())
}

#[test]
fn test_doctor_reports_missing_archive() -> Result<()> {
  let project = TestProject::new()?;
  project.remove("build/libs/adt.jar")?;

  let output = run_procpack_expect_failure(&project.path, &["doctor"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("compiled-archive"));
  assert!(stdout.contains("adt.jar"));
  Ok(())
}

#[test]
fn test_doctor_json_output() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_procpack(&project.path, &["doctor", "--json"])?;
  let results: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  let checks = results.as_array().unwrap();
  assert_eq!(checks.len(), 5);
  assert!(checks.iter().all(|c| c["passed"] == true));
  Ok(())
}

#[test]
fn test_doctor_warns_on_non_semver_tag() -> Result<()> {
  let project = TestProject::new()?;

  // Warnings do not fail the doctor run
  let output = run_procpack(&project.path, &["doctor", "--tag", "vnightly"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("version-format"));
  assert!(stdout.contains("not a semantic version"));
  Ok(())
}
