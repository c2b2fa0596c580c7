//! Library metadata: the ten-key properties contract
//!
//! The Processing contribution manager indexes libraries through a
//! `library.properties` file with a fixed key set. The input file
//! (`release.properties` by convention) carries the same keys; packaging
//! rewrites `prettyVersion` with the resolved release version and passes
//! the other nine values through verbatim.

use crate::core::error::{MetadataError, PackError, PackResult, ResultExt};
use crate::core::properties;
use std::fs;
use std::path::Path;

/// Fixed project-relative path of the written metadata file
pub const OUTPUT_FILE: &str = "library.properties";

/// Keys every metadata file must carry, in output order
pub const REQUIRED_KEYS: [&str; 10] = [
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

/// Library metadata loaded from the properties input
///
/// Values are plain strings throughout. `version` is the integer revision
/// the contribution manager compares for updates and `minRevision`/
/// `maxRevision` bound the compatible Processing revisions, but none of
/// them are validated here; whatever the author wrote propagates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryMetadata {
  pub name: String,
  pub version: String,
  pub pretty_version: String,
  pub authors: String,
  pub url: String,
  pub categories: String,
  pub sentence: String,
  pub paragraph: String,
  pub min_revision: String,
  pub max_revision: String,
}

impl LibraryMetadata {
  /// Load metadata from a properties file
  ///
  /// A missing file or a missing required key is fatal; nothing has been
  /// written at this point, so the build aborts cleanly.
  pub fn load(path: &Path) -> PackResult<Self> {
    if !path.exists() {
      return Err(PackError::Metadata(MetadataError::NotFound {
        path: path.to_path_buf(),
      }));
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read properties from {}", path.display()))?;
    let pairs = properties::parse(&content);

    let require = |key: &str| -> PackResult<String> {
      properties::get(&pairs, key)
        .map(str::to_string)
        .ok_or_else(|| {
          PackError::Metadata(MetadataError::MissingKey {
            key: key.to_string(),
            path: path.to_path_buf(),
          })
        })
    };

    Ok(Self {
      name: require("name")?,
      version: require("version")?,
      pretty_version: require("prettyVersion")?,
      authors: require("authors")?,
      url: require("url")?,
      categories: require("categories")?,
      sentence: require("sentence")?,
      paragraph: require("paragraph")?,
      min_revision: require("minRevision")?,
      max_revision: require("maxRevision")?,
    })
  }

  /// Produce the ten output pairs, with `prettyVersion` replaced by the
  /// resolved release version and every other value passed through verbatim
  pub fn to_pairs(&self, resolved_version: &str) -> Vec<(String, String)> {
    vec![
      ("name".to_string(), self.name.clone()),
      ("version".to_string(), self.version.clone()),
      ("prettyVersion".to_string(), resolved_version.to_string()),
      ("authors".to_string(), self.authors.clone()),
      ("url".to_string(), self.url.clone()),
      ("categories".to_string(), self.categories.clone()),
      ("sentence".to_string(), self.sentence.clone()),
      ("paragraph".to_string(), self.paragraph.clone()),
      ("minRevision".to_string(), self.min_revision.clone()),
      ("maxRevision".to_string(), self.max_revision.clone()),
    ]
  }

  /// Write the output properties file, overwriting any existing file
  pub fn write(&self, path: &Path, resolved_version: &str) -> PackResult<()> {
    let content = properties::format(&self.to_pairs(resolved_version));
    fs::write(path, content).with_context(|| format!("Failed to write properties to {}", path.display()))?;
    Ok(())
  }
}
