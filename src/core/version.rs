//! Release version resolution
//!
//! The effective version comes from one of two places: an externally
//! supplied release tag (CI passes the tag ref that triggered the build),
//! or the `prettyVersion` value in the metadata input when no tag is given.
//! Tags conventionally carry a `v` prefix that must not appear in the
//! published version string.

use crate::core::config::PackConfig;
use crate::core::metadata::LibraryMetadata;
use serde::Serialize;

/// Resolve the effective release version
///
/// A supplied tag has a single leading non-numeric character stripped
/// (`v2.0.0` → `2.0.0`); a tag that already starts with a digit is used
/// whole. No format validation happens here: malformed tags propagate
/// unchanged apart from the stripped prefix.
pub fn resolve_version(tag: Option<&str>, metadata: &LibraryMetadata) -> String {
  match tag {
    Some(tag) => {
      let mut chars = tag.chars();
      match chars.next() {
        Some(first) if !first.is_ascii_digit() => chars.as_str().to_string(),
        _ => tag.to_string(),
      }
    }
    None => metadata.pretty_version.clone(),
  }
}

/// Resolved identity of one release build
///
/// Computed once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDescriptor {
  /// Library base name (jar, zip and txt naming)
  pub lib_name: String,
  /// Effective release version
  pub version: String,
  /// Directory name the staging tree and zip entries nest under
  pub release_name: String,
}

impl ReleaseDescriptor {
  /// Compute the descriptor for a build
  pub fn new(config: &PackConfig, metadata: &LibraryMetadata, tag: Option<&str>) -> Self {
    Self {
      lib_name: config.library.name.clone(),
      version: resolve_version(tag, metadata),
      release_name: config.release_name().to_string(),
    }
  }
}
