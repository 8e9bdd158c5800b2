//! Copy operation reporting.

use std::path::Path;
use std::time::Duration;

/// Report of a completed copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Number of files written.
    pub files_written: usize,

    /// Number of directories that did not exist and were created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the copy.
    pub duration: Duration,
}

impl CopyReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of filesystem entries created or overwritten.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_written + self.directories_created
    }
}

/// Callback trait for progress reporting during a copy.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use uproot_core::ProgressCallback;
///
/// struct Printer;
///
/// impl ProgressCallback for Printer {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("[{current}/{total}] {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback {
    /// Called before a file is read from the tree.
    ///
    /// `current` is 1-indexed.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called after a file's content has been written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when a file has been fully processed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the last file. Not called when the copy fails.
    fn on_complete(&mut self);
}

/// Progress callback that ignores every event.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
