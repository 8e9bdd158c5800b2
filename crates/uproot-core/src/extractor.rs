//! The tree extractor.

use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use tracing::trace;

use crate::CopyReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::UprootConfig;
use crate::UprootError;
use crate::tree::VirtualTree;
use crate::tree::join_tree_path;
use crate::tree::validate_tree_path;

/// Copies the files of a read-only tree onto the real filesystem.
///
/// The file list and the temp directory path are computed once, at
/// construction, and never change afterwards. Dropping an `Uproot` leaves
/// any copied files in place; call [`Uproot::remove_temp`] to clean up.
///
/// Copies are not transactional: a failure part way through leaves the
/// files written so far in place. Concurrent copies into the same
/// destination are not coordinated.
///
/// # Examples
///
/// ```
/// use uproot_core::MemoryTree;
/// use uproot_core::Uproot;
/// use uproot_core::UprootConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tree = MemoryTree::from_files([("a.txt", "alpha"), ("sub/b.txt", "bravo")])?;
/// let config = UprootConfig::default().temp_dir_name("uproot-doc-example");
/// let uproot = Uproot::with_config(&tree, config)?;
/// assert_eq!(uproot.files(), ["a.txt", "sub/b.txt"]);
///
/// uproot.copy_to_temp()?;
/// assert!(uproot.temp_dir().join("sub").join("b.txt").is_file());
///
/// uproot.remove_temp()?;
/// assert!(!uproot.temp_dir().exists());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Uproot<'a, T: VirtualTree + ?Sized> {
    tree: &'a T,
    files: Vec<String>,
    temp_dir: PathBuf,
    config: UprootConfig,
}

impl<'a, T: VirtualTree + ?Sized> Uproot<'a, T> {
    /// Scans `tree` using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UprootError::Scan`] if the tree cannot be walked or yields
    /// a malformed path.
    pub fn new(tree: &'a T) -> Result<Self> {
        Self::with_config(tree, UprootConfig::default())
    }

    /// Scans `tree` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`UprootError::InvalidTempDirName`] if the configured temp
    /// directory name is not a single plain name, and [`UprootError::Scan`]
    /// if the tree cannot be walked or yields a malformed path.
    pub fn with_config(tree: &'a T, config: UprootConfig) -> Result<Self> {
        config.validate()?;
        let files = scan(tree)?;
        let temp_dir = config.resolve_temp_dir();
        debug!(
            files = files.len(),
            temp_dir = %temp_dir.display(),
            "scanned tree"
        );
        Ok(Self {
            tree,
            files,
            temp_dir,
            config,
        })
    }

    /// Copies every file into `dest`, creating directories as needed.
    ///
    /// Existing files at the same paths are overwritten; unrelated files in
    /// `dest` are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`UprootError::Read`] if a file cannot be read from the tree
    /// and [`UprootError::Write`] if a directory or file cannot be written.
    /// The copy stops at the first error.
    pub fn copy_to(&self, dest: impl AsRef<Path>) -> Result<CopyReport> {
        self.copy_to_with_progress(dest, &mut NoopProgress)
    }

    /// Same as [`Uproot::copy_to`], reporting progress to `progress`.
    pub fn copy_to_with_progress(
        &self,
        dest: impl AsRef<Path>,
        progress: &mut dyn ProgressCallback,
    ) -> Result<CopyReport> {
        let dest = dest.as_ref();
        let start = Instant::now();
        let mut report = CopyReport::new();
        let total = self.files.len();

        for (index, file) in self.files.iter().enumerate() {
            progress.on_entry_start(Path::new(file), total, index + 1);

            let content = self
                .tree
                .read(file)
                .map_err(|e| UprootError::read(file.as_str(), e))?;

            let target = join_tree_path(dest, file);
            if let Some(parent) = target.parent() {
                report.directories_created += create_dirs(parent, self.config.dir_mode)?;
            }
            write_file(&target, &content, self.config.file_mode)?;

            let bytes = content.len() as u64;
            report.files_written += 1;
            report.bytes_written += bytes;
            trace!(file = %file, bytes, target = %target.display(), "copied file");

            progress.on_bytes_written(bytes);
            progress.on_entry_complete(Path::new(file));
        }

        report.duration = start.elapsed();
        progress.on_complete();
        debug!(
            dest = %dest.display(),
            files = report.files_written,
            directories = report.directories_created,
            bytes = report.bytes_written,
            "copy complete"
        );
        Ok(report)
    }

    /// Copies every file into the temp directory.
    ///
    /// # Errors
    ///
    /// Same as [`Uproot::copy_to`].
    pub fn copy_to_temp(&self) -> Result<CopyReport> {
        self.copy_to(&self.temp_dir)
    }

    /// Same as [`Uproot::copy_to_temp`], reporting progress to `progress`.
    pub fn copy_to_temp_with_progress(
        &self,
        progress: &mut dyn ProgressCallback,
    ) -> Result<CopyReport> {
        self.copy_to_with_progress(&self.temp_dir, progress)
    }

    /// Recursively deletes the temp directory.
    ///
    /// A missing temp directory is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`UprootError::Delete`] if the directory exists but cannot be
    /// removed.
    pub fn remove_temp(&self) -> Result<()> {
        match fs::remove_dir_all(&self.temp_dir) {
            Ok(()) => {
                debug!(temp_dir = %self.temp_dir.display(), "removed temp dir");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!(temp_dir = %self.temp_dir.display(), "temp dir already absent");
                Ok(())
            }
            Err(e) => Err(UprootError::Delete {
                path: self.temp_dir.clone(),
                source: e,
            }),
        }
    }

    /// Returns the tree-relative paths of all files, in walk order.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Returns the temp directory used by `copy_to_temp` and `remove_temp`.
    #[must_use]
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Returns the underlying tree.
    #[must_use]
    pub fn tree(&self) -> &'a T {
        self.tree
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &UprootConfig {
        &self.config
    }
}

fn scan<T: VirtualTree + ?Sized>(tree: &T) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in tree.walk() {
        let entry = entry.map_err(|e| UprootError::scan(".", e))?;
        validate_tree_path(&entry.path).map_err(|e| UprootError::scan(entry.path.as_str(), e))?;
        if entry.is_dir {
            continue;
        }
        trace!(file = %entry.path, "found file");
        files.push(entry.path);
    }
    Ok(files)
}

/// Creates `dir` and its missing parents, returning how many were created.
fn create_dirs(dir: &Path, mode: u32) -> Result<usize> {
    let missing = dir
        .ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
        .count();
    if missing == 0 {
        return Ok(0);
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder
        .create(dir)
        .map_err(|e| UprootError::write(dir, e))?;
    Ok(missing)
}

fn write_file(path: &Path, content: &[u8], mode: u32) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options
        .open(path)
        .map_err(|e| UprootError::write(path, e))?;
    file.write_all(content)
        .map_err(|e| UprootError::write(path, e))
}
