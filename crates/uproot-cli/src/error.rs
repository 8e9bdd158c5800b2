//! Error conversion utilities for CLI.
//!
//! Converts uproot-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::io;
use std::path::Path;
use uproot_core::UprootError;

/// Converts `UprootError` to user-friendly anyhow error with context
pub fn convert_uproot_error(err: UprootError, source: &Path) -> anyhow::Error {
    match err {
        UprootError::Scan { path, source: e } => {
            anyhow!(
                "Failed to scan '{}' at '{}': {}\n\
                 HINT: Check that the source directory is readable and contains only UTF-8 names.",
                source.display(),
                path,
                e
            )
        }
        UprootError::Read { path, source: e } => {
            anyhow!(
                "Failed to read '{}' from '{}': {}\n\
                 HINT: The source tree may have changed since it was scanned.",
                path,
                source.display(),
                e
            )
        }
        UprootError::Write { path, source: e } if e.kind() == io::ErrorKind::PermissionDenied => {
            anyhow!(
                "Permission denied writing '{}'\n\
                 HINT: Choose an output directory you can write to.",
                path.display()
            )
        }
        UprootError::Write { path, source: e } => {
            anyhow!(
                "Failed to write '{}': {}\n\
                 HINT: Files copied before the failure were left in place.",
                path.display(),
                e
            )
        }
        UprootError::InvalidTempDirName { name, source: e } => {
            anyhow!(
                "Invalid temp directory name '{}': {}\n\
                 HINT: Use a single directory name without separators, such as 'my-app'.",
                name,
                e
            )
        }
        UprootError::Delete { path, source: e } => {
            anyhow!(
                "Failed to remove temp directory '{}': {}\n\
                 HINT: Close programs using files in it, or remove it manually.",
                path.display(),
                e
            )
        }
    }
}

/// Adds source context to a core result
pub fn add_source_context<T>(
    result: Result<T, UprootError>,
    source: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_uproot_error(e, source))
}
