//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Properties input used by every test project
pub const SAMPLE_PROPERTIES: &str = "\
name=adt
version=3
prettyVersion=1.2.0
authors=[Jane Doe](https://example.org)
url=https://example.org/adt
categories=Data
sentence=Data structures for sketches.
paragraph=Stacks, queues, dynamic arrays and binary trees with draw support.
minRevision=228
maxRevision=0
";

/// A temporary project tree shaped like a built library checkout
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create a project with config, metadata, a compiled jar, dependencies,
  /// and assets (including files the exclusion patterns must drop)
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    let project = Self { _root: root, path };

    project.write_file(
      "procpack.toml",
      r#"[library]
name = "adt"

[artifacts]
dependencies = ["build/deps"]
"#,
    )?;
    project.write_file("release.properties", SAMPLE_PROPERTIES)?;

    // Build output
    project.write_file("build/libs/adt.jar", "compiled library bytes")?;
    project.write_file("build/deps/core.jar", "dependency one")?;
    project.write_file("build/deps/gluegen-rt.jar", "dependency two")?;

    // Assets, including paths the exclusion patterns must drop
    project.write_file("README.md", "# adt\n\nData structures for Processing.\n")?;
    project.write_file("examples/Stacks/Stacks.pde", "void setup() {}\n")?;
    project.write_file("examples/networks/pretrained.txt", "must not ship\n")?;
    project.write_file("examples/.DS_Store", "finder junk")?;
    project.write_file("src/adt/Stack.java", "class Stack {}\n")?;

    Ok(project)
  }

  /// Write a file, creating parent directories
  pub fn write_file(&self, relative: &str, content: &str) -> Result<()> {
    let target = self.path.join(relative);
    if let Some(parent) = target.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(target, content)?;
    Ok(())
  }

  /// Delete a file or directory tree
  pub fn remove(&self, relative: &str) -> Result<()> {
    let target = self.path.join(relative);
    if target.is_dir() {
      std::fs::remove_dir_all(target)?;
    } else {
      std::fs::remove_file(target)?;
    }
    Ok(())
  }

  /// Check if a path exists relative to the project root
  pub fn file_exists(&self, relative: &str) -> bool {
    self.path.join(relative).exists()
  }

  /// Read a file relative to the project root
  pub fn read_file(&self, relative: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(relative))?)
  }
}

/// Run the procpack binary, failing the test on a non-zero exit
pub fn run_procpack(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = procpack_command(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "procpack command failed: procpack {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the procpack binary, failing the test if it unexpectedly succeeds
pub fn run_procpack_expect_failure(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = procpack_command(cwd, args)?;

  if output.status.success() {
    anyhow::bail!("procpack {} succeeded but a failure was expected", args.join(" "));
  }

  Ok(output)
}

fn procpack_command(cwd: &Path, args: &[&str]) -> Result<Output> {
  let procpack_bin = env!("CARGO_BIN_EXE_procpack");

  Command::new(procpack_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run procpack")
}
