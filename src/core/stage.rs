//! Artifact assembly: build the release staging tree
//!
//! Staging copies four things under the release root, in order: the
//! compiled library archive, its runtime dependency archives, the
//! configured project assets, and the repository copy of the metadata
//! file. The release root is wiped first; a failure partway through
//! leaves the partial tree on disk for inspection.

use crate::core::config::PackConfig;
use crate::core::error::{PackError, PackResult, ResultExt, StageError};
use crate::core::metadata;
use crate::core::version::ReleaseDescriptor;
use crate::ui::progress::FileProgress;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Filesystem layout of one release build
#[derive(Debug, Clone)]
pub struct ReleaseLayout {
  /// Release root, wiped every run
  pub root: PathBuf,
  /// Staging directory: `<root>/<releaseName>`
  pub staging_dir: PathBuf,
  /// Archive directory: `<root>/<releaseName>/library`
  pub library_dir: PathBuf,
  /// Distributable zip: `<root>/<libName>.zip`
  pub zip_path: PathBuf,
  /// Checksum sidecar: `<root>/<libName>.zip.sha256`
  pub checksum_path: PathBuf,
  /// Repository metadata copy: `<root>/<libName>.txt`
  pub metadata_txt_path: PathBuf,
}

impl ReleaseLayout {
  /// Compute the layout for a descriptor
  pub fn new(project_root: &Path, config: &PackConfig, descriptor: &ReleaseDescriptor) -> Self {
    let root = project_root.join(&config.release.root);
    let staging_dir = root.join(&descriptor.release_name);
    let library_dir = staging_dir.join("library");
    let zip_path = root.join(format!("{}.zip", descriptor.lib_name));
    let checksum_path = root.join(format!("{}.zip.sha256", descriptor.lib_name));
    let metadata_txt_path = root.join(format!("{}.txt", descriptor.lib_name));

    Self {
      root,
      staging_dir,
      library_dir,
      zip_path,
      checksum_path,
      metadata_txt_path,
    }
  }
}

/// Exclusion patterns applied to assets and archive entries
///
/// Entries starting with `*.` match file-name suffixes (`*.DS_Store`
/// matches `.DS_Store` and `Icon.DS_Store`); any other entry matches a
/// whole path component, so `networks` drops every path with a
/// `networks` directory segment.
#[derive(Debug, Clone)]
pub struct ExcludeRules {
  patterns: Vec<String>,
}

impl ExcludeRules {
  /// Build rules from config patterns
  pub fn new(patterns: &[String]) -> Self {
    Self {
      patterns: patterns.to_vec(),
    }
  }

  /// Check a single path component against the patterns
  pub fn matches_component(&self, name: &str) -> bool {
    self.patterns.iter().any(|pattern| match pattern.strip_prefix('*') {
      Some(suffix) => name.ends_with(suffix),
      None => name == pattern,
    })
  }

  /// Check whether any component of a relative path is excluded
  pub fn matches_path(&self, relative: &Path) -> bool {
    relative
      .components()
      .any(|c| self.matches_component(&c.as_os_str().to_string_lossy()))
  }
}

/// Counts from one assembly run
#[derive(Debug, Clone, Serialize)]
pub struct StageSummary {
  /// Total files placed in the staging tree
  pub staged_files: usize,
  /// Runtime dependency archives copied next to the library archive
  pub dependency_archives: usize,
  /// Asset files copied into the release directory
  pub asset_files: usize,
  /// Asset files dropped by exclusion patterns
  pub excluded: usize,
}

/// Copies the compiled archive, dependencies and assets into the staging tree
pub struct Assembler<'a> {
  project_root: &'a Path,
  config: &'a PackConfig,
  excludes: ExcludeRules,
  quiet: bool,
}

impl<'a> Assembler<'a> {
  /// Create an assembler for a project
  pub fn new(project_root: &'a Path, config: &'a PackConfig, quiet: bool) -> Self {
    let excludes = ExcludeRules::new(&config.assets.exclude);
    Self {
      project_root,
      config,
      excludes,
      quiet,
    }
  }

  /// Exclusion rules in effect (shared with the archiver)
  pub fn excludes(&self) -> &ExcludeRules {
    &self.excludes
  }

  /// Delete and recreate the release root
  ///
  /// Idempotent: artifacts from a previous run never leak into this one.
  pub fn reset_release_root(&self, layout: &ReleaseLayout) -> PackResult<()> {
    if layout.root.exists() {
      fs::remove_dir_all(&layout.root)
        .with_context(|| format!("Failed to clean release root {}", layout.root.display()))?;
    }
    fs::create_dir_all(&layout.staging_dir)
      .with_context(|| format!("Failed to create staging directory {}", layout.staging_dir.display()))?;
    Ok(())
  }

  /// Locate the compiled library archive, failing if the build has not run
  pub fn compiled_archive(&self) -> PackResult<PathBuf> {
    let path = self
      .project_root
      .join(self.config.artifacts.archive_path(&self.config.library.name));
    if !path.is_file() {
      return Err(PackError::Stage(StageError::CompiledArchiveMissing { path }));
    }
    Ok(path)
  }

  /// Run the four copy phases into a prepared staging tree
  pub fn assemble(&self, layout: &ReleaseLayout) -> PackResult<StageSummary> {
    self.say("   Copy library...");
    self.copy_compiled_archive(layout)?;

    self.say("   Copy dependencies...");
    let dependency_archives = self.copy_dependencies(layout)?;

    self.say("   Copy additional artifacts...");
    let (asset_files, excluded) = self.copy_assets(layout)?;

    self.say("   Copy repository metadata...");
    self.copy_repository_metadata(layout)?;

    Ok(StageSummary {
      staged_files: 1 + dependency_archives + asset_files,
      dependency_archives,
      asset_files,
      excluded,
    })
  }

  fn copy_compiled_archive(&self, layout: &ReleaseLayout) -> PackResult<()> {
    let source = self.compiled_archive()?;
    fs::create_dir_all(&layout.library_dir)?;

    let file_name = source
      .file_name()
      .ok_or_else(|| PackError::message(format!("Archive path has no file name: {}", source.display())))?;
    fs::copy(&source, layout.library_dir.join(file_name))
      .with_context(|| format!("Failed to copy {}", source.display()))?;
    Ok(())
  }

  /// Copy runtime dependency archives into the library directory
  ///
  /// Config entries are files, or directories whose direct children are
  /// taken as the resolved dependency set.
  fn copy_dependencies(&self, layout: &ReleaseLayout) -> PackResult<usize> {
    let mut copied = 0;

    for entry in &self.config.artifacts.dependencies {
      let source = self.project_root.join(entry);
      if !source.exists() {
        return Err(PackError::Stage(StageError::DependencyMissing { path: source }));
      }

      if source.is_file() {
        copy_file(&source, &layout.library_dir.join(file_name_of(&source)?))?;
        copied += 1;
        continue;
      }

      let mut children: Vec<PathBuf> = fs::read_dir(&source)?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
      children.sort();

      for child in children.into_iter().filter(|p| p.is_file()) {
        copy_file(&child, &layout.library_dir.join(file_name_of(&child)?))?;
        copied += 1;
      }
    }

    Ok(copied)
  }

  /// Copy the configured asset allow-list into the staging root
  ///
  /// Listed entries that do not exist are skipped; excluded paths are
  /// counted but never copied.
  fn copy_assets(&self, layout: &ReleaseLayout) -> PackResult<(usize, usize)> {
    let mut files: Vec<(PathBuf, PathBuf)> = Vec::new();
    let mut excluded = 0;

    for entry in &self.config.assets.include {
      let source = self.project_root.join(entry);
      if !source.exists() {
        self.say(&format!("   (no {} in project, skipping)", entry));
        continue;
      }

      if source.is_file() {
        // Include entries may be nested paths, so match every component
        if self.excludes.matches_path(Path::new(entry)) {
          excluded += 1;
        } else {
          files.push((source, layout.staging_dir.join(entry)));
        }
        continue;
      }

      excluded += self.collect_directory(&source, layout, &mut files)?;
    }

    if files.is_empty() {
      return Ok((0, excluded));
    }

    let mut progress = FileProgress::new(files.len(), format!("Staging {} files", files.len()), self.quiet);
    for (source, target) in &files {
      copy_file(source, target)?;
      progress.inc();
    }

    Ok((files.len(), excluded))
  }

  /// Walk one asset directory, collecting copy pairs and counting excluded files
  fn collect_directory(
    &self,
    source: &Path,
    layout: &ReleaseLayout,
    files: &mut Vec<(PathBuf, PathBuf)>,
  ) -> PackResult<usize> {
    let mut excluded = 0;
    let mut walker = WalkDir::new(source).sort_by_file_name().into_iter();

    while let Some(entry) = walker.next() {
      let entry = entry?;
      let name = entry.file_name().to_string_lossy().into_owned();

      if self.excludes.matches_component(&name) {
        if entry.file_type().is_dir() {
          excluded += count_files(entry.path());
          walker.skip_current_dir();
        } else {
          excluded += 1;
        }
        continue;
      }

      if entry.file_type().is_file() {
        let relative = entry.path().strip_prefix(self.project_root)?;
        files.push((entry.path().to_path_buf(), layout.staging_dir.join(relative)));
      }
    }

    Ok(excluded)
  }

  /// Place the metadata copy the library index consumes at the release root
  fn copy_repository_metadata(&self, layout: &ReleaseLayout) -> PackResult<()> {
    let source = self.project_root.join(metadata::OUTPUT_FILE);
    copy_file(&source, &layout.metadata_txt_path)
      .with_context(|| format!("Failed to copy {} to the release root", metadata::OUTPUT_FILE))?;
    Ok(())
  }

  fn say(&self, message: &str) {
    if !self.quiet {
      println!("{}", message);
    }
  }
}

/// Copy a single file, creating parent directories as needed
fn copy_file(source: &Path, target: &Path) -> PackResult<()> {
  if let Some(parent) = target.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::copy(source, target).with_context(|| format!("Failed to copy {}", source.display()))?;
  Ok(())
}

fn file_name_of(path: &Path) -> PackResult<&std::ffi::OsStr> {
  path.file_name().ok_or_else(|| {
    PackError::with_help(
      format!("Path has no file name: {}", path.display()),
      "Point [artifacts] entries at files or directories, not `..` or a filesystem root",
    )
  })
}

/// Count regular files under a directory (for excluded-subtree reporting)
fn count_files(dir: &Path) -> usize {
  WalkDir::new(dir)
    .into_iter()
    .filter_map(|e| e.ok())
    .filter(|e| e.file_type().is_file())
    .count()
}
