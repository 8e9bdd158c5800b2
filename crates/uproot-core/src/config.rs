//! Extraction configuration.

use std::io;
use std::path::PathBuf;

use crate::Result;
use crate::UprootError;
use crate::tree::is_plain_name;

/// Default name of the directory created under the system temp directory.
pub const DEFAULT_TEMP_DIR_NAME: &str = "uproot-fs";

/// Default mode for created directories (before umask).
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Default mode for created files (before umask).
pub const DEFAULT_FILE_MODE: u32 = 0o777;

/// Configuration for an [`Uproot`](crate::Uproot) extractor.
///
/// The defaults reproduce the permissive behaviour expected by callers that
/// hand extracted assets to other tools: everything is created
/// world-readable and world-writable, subject to the process umask. Modes
/// only apply on Unix and only to entries created by the copy; existing
/// files keep their permissions when overwritten.
///
/// # Examples
///
/// ```
/// use uproot_core::UprootConfig;
///
/// // Permissive defaults, fixed temp directory name
/// let config = UprootConfig::default();
/// assert_eq!(config.temp_dir_name, "uproot-fs");
///
/// // Per-application temp directory with tighter modes
/// let custom = UprootConfig::restrictive().temp_dir_name(env!("CARGO_PKG_NAME"));
/// assert_eq!(custom.file_mode, 0o644);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UprootConfig {
    /// Name of the subdirectory of the system temp directory used by
    /// `copy_to_temp` and `remove_temp`.
    pub temp_dir_name: String,

    /// Mode for directories created during a copy.
    pub dir_mode: u32,

    /// Mode for files created during a copy.
    pub file_mode: u32,
}

impl Default for UprootConfig {
    /// Creates a configuration with the permissive defaults.
    ///
    /// Default values:
    /// - `temp_dir_name`: `"uproot-fs"`
    /// - `dir_mode`: `0o777`
    /// - `file_mode`: `0o777`
    fn default() -> Self {
        Self {
            temp_dir_name: DEFAULT_TEMP_DIR_NAME.to_string(),
            dir_mode: DEFAULT_DIR_MODE,
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

impl UprootConfig {
    /// Creates a configuration with conventional, non world-writable modes
    /// (`0o755` for directories, `0o644` for files).
    #[must_use]
    pub fn restrictive() -> Self {
        Self {
            dir_mode: 0o755,
            file_mode: 0o644,
            ..Default::default()
        }
    }

    /// Sets the temp directory name.
    #[must_use]
    pub fn temp_dir_name(mut self, name: impl Into<String>) -> Self {
        self.temp_dir_name = name.into();
        self
    }

    /// Sets the directory creation mode.
    #[must_use]
    pub fn dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }

    /// Sets the file creation mode.
    #[must_use]
    pub fn file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    /// Checks that the configuration can be used by an extractor.
    ///
    /// # Errors
    ///
    /// Returns [`UprootError::InvalidTempDirName`] if `temp_dir_name` is not
    /// exactly one plain path component.
    pub fn validate(&self) -> Result<()> {
        validate_temp_dir_name(&self.temp_dir_name)
    }

    /// Resolves the temp directory path for this configuration.
    ///
    /// Always `std::env::temp_dir()` joined with `temp_dir_name`. The result
    /// is only guaranteed to lie inside the system temp directory once
    /// [`UprootConfig::validate`] has passed.
    #[must_use]
    pub fn resolve_temp_dir(&self) -> PathBuf {
        std::env::temp_dir().join(&self.temp_dir_name)
    }
}

/// Checks that `name` can be used as the temp directory name.
///
/// The name must be exactly one plain path component: not empty, not `.` or
/// `..`, no separators, no NUL bytes and no drive or root prefix. This keeps
/// the temp directory a direct child of the system temp directory.
///
/// # Errors
///
/// Returns [`UprootError::InvalidTempDirName`] if the name is rejected.
///
/// # Examples
///
/// ```
/// use uproot_core::config::validate_temp_dir_name;
///
/// assert!(validate_temp_dir_name("my-app").is_ok());
/// assert!(validate_temp_dir_name("").is_err());
/// assert!(validate_temp_dir_name("../elsewhere").is_err());
/// ```
pub fn validate_temp_dir_name(name: &str) -> Result<()> {
    if is_plain_name(name) {
        return Ok(());
    }
    Err(UprootError::InvalidTempDirName {
        name: name.to_string(),
        source: io::Error::new(
            io::ErrorKind::InvalidInput,
            "must be a single plain path component",
        ),
    })
}
