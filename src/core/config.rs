use crate::core::error::{ConfigError, PackError, PackResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for procpack
/// Searched in order: procpack.toml, .procpack.toml, .config/procpack.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
  pub library: LibraryConfig,
  #[serde(default)]
  pub artifacts: ArtifactsConfig,
  #[serde(default)]
  pub assets: AssetsConfig,
  #[serde(default)]
  pub release: ReleaseConfig,
}

/// Identity of the packaged library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
  /// Base name used for the compiled archive, the zip, and the repository txt
  pub name: String,

  /// Properties file holding the library metadata
  #[serde(default = "default_properties_path")]
  pub properties: PathBuf,
}

fn default_properties_path() -> PathBuf {
  PathBuf::from("release.properties")
}

/// Compiled artifact locations
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArtifactsConfig {
  /// Path to the compiled library archive (default: build/libs/<name>.jar)
  #[serde(default)]
  pub archive: Option<PathBuf>,

  /// Runtime dependency archives: individual files, or directories whose
  /// direct children are copied alongside the library archive
  #[serde(default)]
  pub dependencies: Vec<PathBuf>,
}

impl ArtifactsConfig {
  /// Resolve the compiled archive path for a library name
  pub fn archive_path(&self, lib_name: &str) -> PathBuf {
    self
      .archive
      .clone()
      .unwrap_or_else(|| PathBuf::from("build").join("libs").join(format!("{}.jar", lib_name)))
  }
}

/// Auxiliary assets copied into the staging root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
  /// Top-level files and directories copied into the release directory
  #[serde(default = "default_asset_include")]
  pub include: Vec<String>,

  /// Exclusion patterns. Entries starting with `*.` match file-name
  /// suffixes; any other entry matches a whole path component.
  #[serde(default = "default_asset_exclude")]
  pub exclude: Vec<String>,
}

fn default_asset_include() -> Vec<String> {
  vec![
    "README.md".to_string(),
    "readme".to_string(),
    "library.properties".to_string(),
    "examples".to_string(),
    "src".to_string(),
  ]
}

fn default_asset_exclude() -> Vec<String> {
  vec!["*.DS_Store".to_string(), "networks".to_string()]
}

impl Default for AssetsConfig {
  fn default() -> Self {
    Self {
      include: default_asset_include(),
      exclude: default_asset_exclude(),
    }
  }
}

/// Release output layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
  /// Root directory for staging and archive output, wiped every run
  #[serde(default = "default_release_root")]
  pub root: PathBuf,

  /// Name of the release directory inside the root (default: library name)
  #[serde(default)]
  pub name: Option<String>,
}

fn default_release_root() -> PathBuf {
  PathBuf::from("release")
}

impl Default for ReleaseConfig {
  fn default() -> Self {
    Self {
      root: default_release_root(),
      name: None,
    }
  }
}

impl PackConfig {
  /// Find config file in search order: procpack.toml, .procpack.toml, .config/procpack.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("procpack.toml"),
      path.join(".procpack.toml"),
      path.join(".config").join("procpack.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from procpack.toml (searches multiple locations)
  pub fn load(path: &Path) -> PackResult<Self> {
    let config_path = Self::find_config_path(path).ok_or_else(|| {
      PackError::Config(ConfigError::NotFound {
        project_root: path.to_path_buf(),
      })
    })?;

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: PackConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config
      .validate()
      .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    Ok(config)
  }

  /// Save config to procpack.toml (default location)
  pub fn save(&self, path: &Path) -> PackResult<()> {
    let config_path = path.join("procpack.toml");
    let content = toml_edit::ser::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(())
  }

  /// Check if config exists at the given path
  pub fn exists(path: &Path) -> bool {
    Self::find_config_path(path).is_some()
  }

  /// Create a new config with defaults for a library name
  pub fn new(lib_name: impl Into<String>) -> Self {
    Self {
      library: LibraryConfig {
        name: lib_name.into(),
        properties: default_properties_path(),
      },
      artifacts: ArtifactsConfig::default(),
      assets: AssetsConfig::default(),
      release: ReleaseConfig::default(),
    }
  }

  /// Validate the loaded configuration
  pub fn validate(&self) -> PackResult<()> {
    if self.library.name.is_empty() {
      return Err(PackError::Config(ConfigError::MissingField {
        field: "library.name".to_string(),
      }));
    }

    // The name becomes a file name; a path separator would scatter output
    if self.library.name.contains('/') || self.library.name.contains('\\') {
      return Err(PackError::Config(ConfigError::InvalidField {
        field: "library.name".to_string(),
        reason: "must not contain path separators".to_string(),
      }));
    }

    if let Some(name) = &self.release.name
      && (name.is_empty() || name.contains('/') || name.contains('\\'))
    {
      return Err(PackError::Config(ConfigError::InvalidField {
        field: "release.name".to_string(),
        reason: "must be a plain directory name".to_string(),
      }));
    }

    if self.assets.exclude.iter().any(|p| p.is_empty()) {
      return Err(PackError::Config(ConfigError::InvalidField {
        field: "assets.exclude".to_string(),
        reason: "empty patterns are not allowed".to_string(),
      }));
    }

    Ok(())
  }

  /// Effective release directory name
  pub fn release_name(&self) -> &str {
    self.release.name.as_deref().unwrap_or(&self.library.name)
  }
}
