//! Error types for scan, copy and cleanup operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `UprootError`.
pub type Result<T> = std::result::Result<T, UprootError>;

/// Coarse classification of an [`UprootError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tree could not be enumerated at construction.
    Scan,
    /// File content could not be read from the tree.
    Read,
    /// A directory or file could not be written to the destination.
    Write,
    /// The temp directory could not be removed.
    Delete,
    /// The configuration was rejected at construction.
    Config,
}

/// Errors that can occur while scanning, copying or removing a tree.
#[derive(Error, Debug)]
pub enum UprootError {
    /// The tree walk failed or yielded a malformed entry.
    #[error("failed to scan tree at '{path}': {source}")]
    Scan {
        /// Tree-relative path of the failing entry (`.` for the root).
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Reading a file from the tree failed.
    #[error("failed to read '{path}' from tree: {source}")]
    Read {
        /// Tree-relative path of the file.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Creating a directory or writing a file failed.
    #[error("failed to write '{path}': {source}")]
    Write {
        /// Destination path on the real filesystem.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Removing the temp directory failed.
    #[error("failed to remove '{path}': {source}")]
    Delete {
        /// Directory that could not be removed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configured temp directory name is not a single plain name.
    #[error("invalid temp directory name '{name}': {source}")]
    InvalidTempDirName {
        /// The rejected name.
        name: String,
        /// Underlying error, always of kind `InvalidInput`.
        #[source]
        source: std::io::Error,
    },
}

impl UprootError {
    /// Returns the kind of failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use uproot_core::ErrorKind;
    /// use uproot_core::UprootError;
    ///
    /// let err = UprootError::Read {
    ///     path: "missing.txt".to_string(),
    ///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::Read);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Scan { .. } => ErrorKind::Scan,
            Self::Read { .. } => ErrorKind::Read,
            Self::Write { .. } => ErrorKind::Write,
            Self::Delete { .. } => ErrorKind::Delete,
            Self::InvalidTempDirName { .. } => ErrorKind::Config,
        }
    }

    /// Returns the path the failure relates to.
    ///
    /// Scan and read errors carry tree-relative paths, write and delete
    /// errors carry real filesystem paths. Config errors carry the rejected
    /// temp directory name.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Scan { path, .. } | Self::Read { path, .. } => Path::new(path),
            Self::InvalidTempDirName { name, .. } => Path::new(name),
            Self::Write { path, .. } | Self::Delete { path, .. } => path,
        }
    }

    /// Returns the underlying I/O error.
    #[must_use]
    pub const fn io_error(&self) -> &std::io::Error {
        match self {
            Self::Scan { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. }
            | Self::Delete { source, .. }
            | Self::InvalidTempDirName { source, .. } => source,
        }
    }

    pub(crate) fn scan(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Scan {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = UprootError::scan("sub/../x", io::Error::other("bad component"));
        assert_eq!(
            err.to_string(),
            "failed to scan tree at 'sub/../x': bad component"
        );
    }

    #[test]
    fn test_error_kind() {
        let err = UprootError::write("/tmp/out/a.txt", io::Error::other("disk full"));
        assert_eq!(err.kind(), ErrorKind::Write);

        let err = UprootError::Delete {
            path: PathBuf::from("/tmp/uproot-fs"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.kind(), ErrorKind::Delete);
    }

    #[test]
    fn test_error_path() {
        let err = UprootError::read("sub/b.txt", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.path(), Path::new("sub/b.txt"));

        let err = UprootError::write("/out/sub", io::Error::other("denied"));
        assert_eq!(err.path(), Path::new("/out/sub"));
    }

    #[test]
    fn test_invalid_temp_dir_name_error() {
        let err = UprootError::InvalidTempDirName {
            name: "../x".to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a plain name"),
        };
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.path(), Path::new("../x"));
        assert_eq!(
            err.to_string(),
            "invalid temp directory name '../x': not a plain name"
        );
    }

    #[test]
    fn test_error_source_preserved() {
        let err = UprootError::read("a.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.source().is_some());
        assert_eq!(err.io_error().kind(), io::ErrorKind::NotFound);
    }
}
