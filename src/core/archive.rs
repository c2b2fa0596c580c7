//! Package archiving: zip the staging tree
//!
//! The distributable zip nests every entry under the release name, so
//! extracting it yields a single `<releaseName>/` directory the way the
//! contribution manager expects. Entry order is deterministic (sorted
//! walk) and OS artifact files are excluded a second time in case they
//! appeared after staging.

use crate::core::error::{PackResult, ResultExt};
use crate::core::stage::ExcludeRules;
use crate::ui::progress::FileProgress;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Result of one archive run
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveSummary {
  /// File entries written into the zip
  pub entries: usize,
  /// Entries dropped by exclusion patterns
  pub excluded: usize,
  /// SHA-256 digest of the finished zip
  pub sha256: String,
}

/// Compress the staging tree into `zip_path`, nested under `release_name`
pub fn write_archive(
  staging_dir: &Path,
  zip_path: &Path,
  release_name: &str,
  excludes: &ExcludeRules,
  quiet: bool,
) -> PackResult<ArchiveSummary> {
  let (files, dirs, excluded) = collect_entries(staging_dir, excludes)?;

  let file = fs::File::create(zip_path).with_context(|| format!("Failed to create {}", zip_path.display()))?;
  let mut writer = ZipWriter::new(file);
  let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

  for dir in &dirs {
    writer.add_directory(format!("{}/{}", release_name, to_entry_name(dir)), options)?;
  }

  let mut progress = FileProgress::new(files.len(), format!("Archiving {} files", files.len()), quiet);
  for relative in &files {
    writer.start_file(format!("{}/{}", release_name, to_entry_name(relative)), options)?;
    let mut source = fs::File::open(staging_dir.join(relative))
      .with_context(|| format!("Failed to read staged file {}", relative.display()))?;
    io::copy(&mut source, &mut writer)?;
    progress.inc();
  }

  writer.finish()?;

  let sha256 = digest_file(zip_path)?;

  Ok(ArchiveSummary {
    entries: files.len(),
    excluded,
    sha256,
  })
}

/// Write the `sha256sum`-style checksum sidecar for the zip
pub fn write_checksum(zip_path: &Path, checksum_path: &Path, sha256: &str) -> PackResult<()> {
  let file_name = zip_path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
  fs::write(checksum_path, format!("{}  {}\n", sha256, file_name))
    .with_context(|| format!("Failed to write {}", checksum_path.display()))?;
  Ok(())
}

/// Walk the staging tree, splitting paths into files and directories
fn collect_entries(staging_dir: &Path, excludes: &ExcludeRules) -> PackResult<(Vec<PathBuf>, Vec<PathBuf>, usize)> {
  let mut files = Vec::new();
  let mut dirs = Vec::new();
  let mut excluded = 0;
  let mut walker = WalkDir::new(staging_dir).sort_by_file_name().into_iter();

  while let Some(entry) = walker.next() {
    let entry = entry?;
    if entry.path() == staging_dir {
      continue;
    }

    let name = entry.file_name().to_string_lossy().into_owned();
    if excludes.matches_component(&name) {
      if entry.file_type().is_dir() {
        walker.skip_current_dir();
      }
      excluded += 1;
      continue;
    }

    let relative = entry.path().strip_prefix(staging_dir)?.to_path_buf();
    if entry.file_type().is_dir() {
      dirs.push(relative);
    } else {
      files.push(relative);
    }
  }

  Ok((files, dirs, excluded))
}

/// Zip entry names always use forward slashes
fn to_entry_name(relative: &Path) -> String {
  relative
    .components()
    .map(|c| c.as_os_str().to_string_lossy())
    .collect::<Vec<_>>()
    .join("/")
}

/// SHA-256 of a file's contents, hex encoded
fn digest_file(path: &Path) -> PackResult<String> {
  let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let mut hasher = Sha256::new();
  hasher.update(&bytes);
  Ok(format!("{:x}", hasher.finalize()))
}
