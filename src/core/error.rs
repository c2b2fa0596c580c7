//! Error types for procpack with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and provides
//! contextual help messages to users. Every error includes a helpful suggestion
//! to guide users toward resolution.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for procpack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing metadata)
  User = 1,
  /// System error (filesystem, archive I/O)
  System = 2,
  /// Validation failure (doctor checks failed)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for procpack
#[derive(Debug)]
pub enum PackError {
  /// Configuration errors
  Config(ConfigError),

  /// Library metadata errors
  Metadata(MetadataError),

  /// Staging and archiving errors
  Stage(StageError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl PackError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    PackError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    PackError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      PackError::Message { message, context, help } => PackError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      PackError::Config(_) => ExitCode::User,
      PackError::Metadata(_) => ExitCode::User,
      PackError::Stage(_) => ExitCode::System,
      PackError::Io(_) => ExitCode::System,
      PackError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      PackError::Config(e) => e.help_message(),
      PackError::Metadata(e) => e.help_message(),
      PackError::Stage(e) => e.help_message(),
      PackError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for PackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PackError::Config(e) => write!(f, "{}", e),
      PackError::Metadata(e) => write!(f, "{}", e),
      PackError::Stage(e) => write!(f, "{}", e),
      PackError::Io(e) => write!(f, "I/O error: {}", e),
      PackError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for PackError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PackError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for PackError {
  fn from(err: io::Error) -> Self {
    PackError::Io(err)
  }
}

impl From<String> for PackError {
  fn from(msg: String) -> Self {
    PackError::message(msg)
  }
}

impl From<&str> for PackError {
  fn from(msg: &str) -> Self {
    PackError::message(msg)
  }
}

impl From<toml_edit::TomlError> for PackError {
  fn from(err: toml_edit::TomlError) -> Self {
    PackError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for PackError {
  fn from(err: toml_edit::de::Error) -> Self {
    PackError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<toml_edit::ser::Error> for PackError {
  fn from(err: toml_edit::ser::Error) -> Self {
    PackError::message(format!("TOML serialization error: {}", err))
  }
}

impl From<serde_json::Error> for PackError {
  fn from(err: serde_json::Error) -> Self {
    PackError::message(format!("JSON error: {}", err))
  }
}

impl From<zip::result::ZipError> for PackError {
  fn from(err: zip::result::ZipError) -> Self {
    PackError::Stage(StageError::ArchiveWrite {
      reason: err.to_string(),
    })
  }
}

impl From<walkdir::Error> for PackError {
  fn from(err: walkdir::Error) -> Self {
    let message = err.to_string();
    match err.into_io_error() {
      Some(io_err) => PackError::Io(io_err),
      None => PackError::message(format!("Directory walk error: {}", message)),
    }
  }
}

impl From<std::path::StripPrefixError> for PackError {
  fn from(err: std::path::StripPrefixError) -> Self {
    PackError::message(format!("Path strip prefix error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for PackError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    PackError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// procpack.toml not found
  NotFound { project_root: PathBuf },

  /// Missing required field
  MissingField { field: String },

  /// Field value is invalid
  InvalidField { field: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => Some("Run `procpack init` to create a configuration file.".to_string()),
      ConfigError::InvalidField { field, .. } => {
        Some(format!("Fix the `{}` entry in procpack.toml and re-run.", field))
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { project_root } => {
        write!(
          f,
          "No procpack configuration found.\nSearched from: {}",
          project_root.display()
        )
      }
      ConfigError::MissingField { field } => {
        write!(f, "Missing required field in config: {}", field)
      }
      ConfigError::InvalidField { field, reason } => {
        write!(f, "Invalid config field `{}`: {}", field, reason)
      }
    }
  }
}

/// Library metadata errors
#[derive(Debug)]
pub enum MetadataError {
  /// The properties input file does not exist
  NotFound { path: PathBuf },

  /// A required key is absent from the properties file
  MissingKey { key: String, path: PathBuf },
}

impl MetadataError {
  fn help_message(&self) -> Option<String> {
    match self {
      MetadataError::NotFound { path } => Some(format!(
        "Create {} with the library metadata, or point [library].properties at the right file.",
        path.display()
      )),
      MetadataError::MissingKey { key, .. } => Some(format!(
        "Add a `{}=...` line to the properties file. The contribution manager requires all ten keys.",
        key
      )),
    }
  }
}

impl fmt::Display for MetadataError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MetadataError::NotFound { path } => {
        write!(f, "Library properties file not found: {}", path.display())
      }
      MetadataError::MissingKey { key, path } => {
        write!(f, "Required key '{}' missing from {}", key, path.display())
      }
    }
  }
}

/// Staging and archiving errors
#[derive(Debug)]
pub enum StageError {
  /// The compiled library archive is absent
  CompiledArchiveMissing { path: PathBuf },

  /// A configured dependency path does not exist
  DependencyMissing { path: PathBuf },

  /// Zip write failure
  ArchiveWrite { reason: String },
}

impl StageError {
  fn help_message(&self) -> Option<String> {
    match self {
      StageError::CompiledArchiveMissing { .. } => Some(
        "Build the library first so the compiled archive exists, or fix [artifacts].archive in procpack.toml."
          .to_string(),
      ),
      StageError::DependencyMissing { .. } => {
        Some("Fix the [artifacts].dependencies entries in procpack.toml, or remove paths that no longer exist.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StageError::CompiledArchiveMissing { path } => {
        write!(f, "Compiled library archive not found: {}", path.display())
      }
      StageError::DependencyMissing { path } => {
        write!(f, "Dependency path not found: {}", path.display())
      }
      StageError::ArchiveWrite { reason } => {
        write!(f, "Failed to write release archive: {}", reason)
      }
    }
  }
}

/// Result type alias for procpack
pub type PackResult<T> = Result<T, PackError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> PackResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> PackResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<PackError>,
{
  fn context(self, ctx: impl Into<String>) -> PackResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> PackResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with colors and help text
pub fn print_error(error: &PackError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

/// Convert anyhow::Error to PackError (for the test boundary and foreign errors)
impl From<anyhow::Error> for PackError {
  fn from(err: anyhow::Error) -> Self {
    PackError::message(err.to_string())
  }
}
