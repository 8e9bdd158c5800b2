//! Read-only file tree abstraction and its backends.
//!
//! A [`VirtualTree`] offers exactly two capabilities: a recursive walk
//! yielding entries in depth-first order, and a read of a file's full
//! content by its tree-relative path. Tree paths are `/`-separated and
//! relative to the tree root.

mod dir;
#[cfg(feature = "include-dir")]
mod embedded;
mod memory;

pub use dir::DirTree;
pub use memory::MemoryTree;

use std::borrow::Cow;
use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// A single entry yielded by [`VirtualTree::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path relative to the tree root, `/`-separated.
    pub path: String,

    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl TreeEntry {
    /// Creates a file entry.
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    /// Creates a directory entry.
    #[must_use]
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// A read-only, hierarchical file tree.
///
/// Implementations must be immutable for as long as they are borrowed by an
/// extractor. The root itself is not yielded by `walk`.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use std::io;
/// use uproot_core::TreeEntry;
/// use uproot_core::VirtualTree;
///
/// struct Single;
///
/// impl VirtualTree for Single {
///     fn walk(&self) -> Box<dyn Iterator<Item = io::Result<TreeEntry>> + '_> {
///         Box::new(std::iter::once(Ok(TreeEntry::file("only.txt"))))
///     }
///
///     fn read(&self, path: &str) -> io::Result<Cow<'_, [u8]>> {
///         match path {
///             "only.txt" => Ok(Cow::Borrowed(b"hello")),
///             _ => Err(io::Error::from(io::ErrorKind::NotFound)),
///         }
///     }
/// }
/// ```
pub trait VirtualTree {
    /// Walks the whole tree depth-first, parents before children.
    fn walk(&self) -> Box<dyn Iterator<Item = io::Result<TreeEntry>> + '_>;

    /// Reads the full content of the file at `path`.
    fn read(&self, path: &str) -> io::Result<Cow<'_, [u8]>>;
}

/// Checks that `path` is a clean tree path.
///
/// Rejects empty paths, absolute paths, empty segments, `.` and `..`
/// segments, NUL bytes, backslashes and segments the host platform would
/// parse as anything other than a single plain name (such as `C:` on
/// Windows).
pub fn validate_tree_path(path: &str) -> io::Result<()> {
    if path.is_empty() {
        return Err(invalid_path(path, "empty path"));
    }
    if path.contains('\0') {
        return Err(invalid_path(path, "path contains null byte"));
    }
    if path.contains('\\') {
        return Err(invalid_path(path, "path contains backslash"));
    }
    if path.starts_with('/') {
        return Err(invalid_path(path, "path is absolute"));
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(invalid_path(path, "empty path segment")),
            "." | ".." => return Err(invalid_path(path, "relative path segment")),
            _ if !is_plain_name(segment) => {
                return Err(invalid_path(path, "segment is not a plain name"));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Returns `true` if `name` parses as exactly one normal path component
/// equal to itself.
pub(crate) fn is_plain_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['\0', '/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}

/// Joins a tree path onto a real filesystem base directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use uproot_core::tree::join_tree_path;
///
/// let joined = join_tree_path(Path::new("/out"), "sub/b.txt");
/// assert_eq!(joined, Path::new("/out").join("sub").join("b.txt"));
/// ```
#[must_use]
pub fn join_tree_path(base: &Path, path: &str) -> PathBuf {
    path.split('/').fold(base.to_path_buf(), |acc, part| acc.join(part))
}

/// Converts a relative native path into a `/`-separated tree path.
pub(crate) fn to_tree_path(path: &Path) -> io::Result<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("path is not valid UTF-8: {}", path.display()),
                )
            })?),
            Component::CurDir => {}
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("path is not relative: {}", path.display()),
                ));
            }
        }
    }
    Ok(parts.join("/"))
}

fn invalid_path(path: &str, reason: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("invalid tree path '{}': {reason}", path.escape_debug()),
    )
}
