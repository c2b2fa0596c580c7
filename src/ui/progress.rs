//! Progress indicators for long-running operations
//!
//! Uses `linya` for allocation-free progress bars. Staging and archiving
//! a large example set is the only place packaging takes visible time.

use linya::{Bar, Progress};

/// Progress bar wrapper for file operations
///
/// Quiet mode (JSON output) draws nothing.
pub struct FileProgress {
  inner: Option<(Progress, Bar)>,
}

impl FileProgress {
  /// Create a new progress bar for file copies
  pub fn new(total: usize, label: impl Into<String>, quiet: bool) -> Self {
    if quiet || total == 0 {
      return Self { inner: None };
    }

    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self {
      inner: Some((progress, bar)),
    }
  }

  /// Increment progress by 1
  pub fn inc(&mut self) {
    if let Some((progress, bar)) = &mut self.inner {
      progress.inc_and_draw(bar, 1);
    }
  }
}
