//! Integration tests for `procpack package`

use crate::helpers::{TestProject, run_procpack};
use anyhow::Result;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fs;
use walkdir::WalkDir;

fn zip_names(project: &TestProject) -> Result<Vec<String>> {
  let file = fs::File::open(project.path.join("release/adt.zip"))?;
  let mut archive = zip::ZipArchive::new(file)?;
  Ok((0..archive.len()).map(|i| archive.by_index(i).unwrap().name().to_string()).collect())
}

#[test]
fn test_package_produces_all_outputs() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["package"])?;

  assert!(project.file_exists("release/adt.zip"));
  assert!(project.file_exists("release/adt.zip.sha256"));
  assert!(project.file_exists("release/adt.txt"));
  assert!(project.file_exists("release/adt/library/adt.jar"));
  assert!(project.file_exists("library.properties"));
  Ok(())
}

#[test]
fn test_package_zip_mirrors_staging_tree() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["package"])?;

  // Every staged file appears in the zip, nested under the release name
  let staging = project.path.join("release/adt");
  let staged: BTreeSet<String> = WalkDir::new(&staging)
    .into_iter()
    .filter_map(|e| e.ok())
    .filter(|e| e.file_type().is_file())
    .map(|e| {
      let relative = e.path().strip_prefix(&staging).unwrap();
      let components: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
      format!("adt/{}", components.join("/"))
    })
    .collect();

  let zipped: BTreeSet<String> = zip_names(&project)?.into_iter().filter(|n| !n.ends_with('/')).collect();

  assert_eq!(staged, zipped);
  Ok(())
}

#[test]
fn test_package_zip_has_no_excluded_entries() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["package"])?;

  let names = zip_names(&project)?;
  assert!(names.iter().all(|n| n.starts_with("adt/")));
  assert!(!names.iter().any(|n| n.ends_with(".DS_Store")));
  assert!(!names.iter().any(|n| n.contains("/networks/")));
  Ok(())
}

#[test]
fn test_package_checksum_matches_zip() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["package"])?;

  let bytes = fs::read(project.path.join("release/adt.zip"))?;
  let mut hasher = Sha256::new();
  hasher.update(&bytes);
  let expected = format!("{:x}", hasher.finalize());

  let sidecar = project.read_file("release/adt.zip.sha256")?;
  assert_eq!(sidecar, format!("{}  adt.zip\n", expected));
  Ok(())
}

#[test]
fn test_package_json_report() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_procpack(&project.path, &["package", "--json", "--tag", "v2.0.0"])?;
  let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(report["library"], "adt");
  assert_eq!(report["version"], "2.0.0");
  assert_eq!(report["state"], "archived");
  assert!(report["archive"].as_str().unwrap().ends_with("adt.zip"));
  assert_eq!(report["archive_sha256"].as_str().unwrap().len(), 64);
  assert!(report["created_at"].as_str().is_some());
  Ok(())
}

#[test]
fn test_package_rerun_drops_removed_files() -> Result<()> {
  let project = TestProject::new()?;

  run_procpack(&project.path, &["package"])?;
  assert!(zip_names(&project)?.contains(&"adt/examples/Stacks/Stacks.pde".to_string()));

  project.remove("examples")?;
  run_procpack(&project.path, &["package"])?;

  let names = zip_names(&project)?;
  assert!(!names.iter().any(|n| n.contains("examples")));
  assert!(!project.file_exists("release/adt/examples"));
  Ok(())
}
