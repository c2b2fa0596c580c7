//! Release pipeline: the packaging state machine
//!
//! One packaging run walks `Idle → Cleaned → Verified → MetadataWritten →
//! Staged → Archived`, strictly in order. `Verified` checks that the
//! compiled archive exists; building it is the project build tool's job,
//! not ours. No transition is retried: a failure halts the machine where
//! it stands and leaves intermediate artifacts on disk for inspection.

use crate::core::archive::{self, ArchiveSummary};
use crate::core::config::PackConfig;
use crate::core::error::PackResult;
use crate::core::metadata::{self, LibraryMetadata};
use crate::core::stage::{Assembler, ReleaseLayout, StageSummary};
use crate::core::version::ReleaseDescriptor;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Pipeline position, advanced only on stage success
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
  Idle,
  Cleaned,
  Verified,
  MetadataWritten,
  Staged,
  Archived,
}

impl fmt::Display for PipelineState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      PipelineState::Idle => "idle",
      PipelineState::Cleaned => "cleaned",
      PipelineState::Verified => "verified",
      PipelineState::MetadataWritten => "metadata_written",
      PipelineState::Staged => "staged",
      PipelineState::Archived => "archived",
    };
    write!(f, "{}", name)
  }
}

/// Outcome of a packaging run, serializable for `--json`
#[derive(Debug, Clone, Serialize)]
pub struct PackageReport {
  pub library: String,
  pub version: String,
  pub release_dir: PathBuf,
  pub staged_files: usize,
  pub dependency_archives: usize,
  pub excluded: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archive: Option<PathBuf>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archive_sha256: Option<String>,
  pub created_at: DateTime<Utc>,
  pub state: PipelineState,
}

/// Drives one release build through the pipeline stages
pub struct ReleasePipeline<'a> {
  project_root: &'a Path,
  config: &'a PackConfig,
  tag: Option<String>,
  quiet: bool,
  state: PipelineState,
  summary: Option<StageSummary>,
  archive: Option<ArchiveSummary>,
}

impl<'a> ReleasePipeline<'a> {
  /// Create an idle pipeline for a project
  pub fn new(project_root: &'a Path, config: &'a PackConfig, tag: Option<String>, quiet: bool) -> Self {
    Self {
      project_root,
      config,
      tag,
      quiet,
      state: PipelineState::Idle,
      summary: None,
      archive: None,
    }
  }

  /// Current pipeline position
  #[allow(dead_code)]
  pub fn state(&self) -> PipelineState {
    self.state
  }

  /// Run every stage up to and including `target`
  ///
  /// The metadata input is loaded before any stage runs, so a missing or
  /// incomplete properties file aborts before anything is written.
  pub fn run_to(&mut self, target: PipelineState) -> PackResult<PackageReport> {
    let metadata = LibraryMetadata::load(&self.project_root.join(&self.config.library.properties))?;
    let descriptor = ReleaseDescriptor::new(self.config, &metadata, self.tag.as_deref());
    let layout = ReleaseLayout::new(self.project_root, self.config, &descriptor);
    let assembler = Assembler::new(self.project_root, self.config, self.quiet);

    if self.state < PipelineState::Cleaned && target >= PipelineState::Cleaned {
      self.say("   Cleaning release...");
      assembler.reset_release_root(&layout)?;
      self.state = PipelineState::Cleaned;
    }

    if self.state < PipelineState::Verified && target >= PipelineState::Verified {
      let archive_path = assembler.compiled_archive()?;
      self.say(&format!("   Found compiled archive {}", archive_path.display()));
      self.state = PipelineState::Verified;
    }

    if self.state < PipelineState::MetadataWritten && target >= PipelineState::MetadataWritten {
      self.say(&format!("   Writing {}...", metadata::OUTPUT_FILE));
      metadata.write(&self.project_root.join(metadata::OUTPUT_FILE), &descriptor.version)?;
      self.state = PipelineState::MetadataWritten;
    }

    if self.state < PipelineState::Staged && target >= PipelineState::Staged {
      self.say("   Creating package...");
      self.summary = Some(assembler.assemble(&layout)?);
      self.state = PipelineState::Staged;
    }

    if self.state < PipelineState::Archived && target >= PipelineState::Archived {
      self.say("   Create zip file...");
      let summary = archive::write_archive(
        &layout.staging_dir,
        &layout.zip_path,
        &descriptor.release_name,
        assembler.excludes(),
        self.quiet,
      )?;
      archive::write_checksum(&layout.zip_path, &layout.checksum_path, &summary.sha256)?;
      self.archive = Some(summary);
      self.state = PipelineState::Archived;
    }

    Ok(self.report(&descriptor, &layout))
  }

  /// Run the full pipeline through archiving
  pub fn run(&mut self) -> PackResult<PackageReport> {
    self.run_to(PipelineState::Archived)
  }

  fn report(&self, descriptor: &ReleaseDescriptor, layout: &ReleaseLayout) -> PackageReport {
    let staged = self.summary.as_ref();
    let archived = self.archive.as_ref();

    PackageReport {
      library: descriptor.lib_name.clone(),
      version: descriptor.version.clone(),
      release_dir: layout.staging_dir.clone(),
      staged_files: staged.map(|s| s.staged_files).unwrap_or(0),
      dependency_archives: staged.map(|s| s.dependency_archives).unwrap_or(0),
      excluded: staged.map(|s| s.excluded).unwrap_or(0) + archived.map(|a| a.excluded).unwrap_or(0),
      archive: archived.map(|_| layout.zip_path.clone()),
      archive_sha256: archived.map(|a| a.sha256.clone()),
      created_at: Utc::now(),
      state: self.state,
    }
  }

  fn say(&self, message: &str) {
    if !self.quiet {
      println!("{}", message);
    }
  }
}
