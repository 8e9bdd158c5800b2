//! Real directory exposed as a read-only tree.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use tracing::trace;
use walkdir::WalkDir;

use super::TreeEntry;
use super::VirtualTree;
use super::join_tree_path;
use super::to_tree_path;

/// A directory on the real filesystem treated as a read-only tree.
///
/// Useful for mounted read-only overlays and for running the same code
/// against unbundled assets during development. Entries are walked sorted
/// by file name and symlinks are followed. Special files (FIFOs, sockets,
/// devices) are left out of the walk.
///
/// # Examples
///
/// ```no_run
/// use uproot_core::DirTree;
/// use uproot_core::Uproot;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = DirTree::new("assets")?;
/// let uproot = Uproot::new(&tree)?;
/// uproot.copy_to("/srv/www")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTree {
    root: PathBuf,
}

impl DirTree {
    /// Opens `root` as a tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        let metadata = fs::metadata(&root).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("cannot open tree root {}: {e}", root.display()),
            )
        })?;
        if !metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("tree root is not a directory: {}", root.display()),
            ));
        }
        Ok(Self { root })
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry(&self, entry: &walkdir::DirEntry) -> io::Result<TreeEntry> {
        let relative = entry.path().strip_prefix(&self.root).map_err(|_| {
            io::Error::other(format!(
                "walked outside of tree root: {}",
                entry.path().display()
            ))
        })?;
        Ok(TreeEntry {
            path: to_tree_path(relative)?,
            is_dir: entry.file_type().is_dir(),
        })
    }
}

/// Only directories and regular files are part of the tree; FIFOs, sockets
/// and device nodes are skipped.
fn is_walkable(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_dir() || file_type.is_file()
}

impl VirtualTree for DirTree {
    fn walk(&self) -> Box<dyn Iterator<Item = io::Result<TreeEntry>> + '_> {
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        Box::new(walker.filter_map(move |entry| match entry {
            Ok(entry) if is_walkable(&entry) => Some(self.entry(&entry)),
            Ok(entry) => {
                trace!(path = %entry.path().display(), "skipping special file");
                None
            }
            Err(e) => Some(Err(io::Error::from(e))),
        }))
    }

    fn read(&self, path: &str) -> io::Result<Cow<'_, [u8]>> {
        fs::read(join_tree_path(&self.root, path)).map(Cow::Owned)
    }
}
