//! Materialize read-only file trees onto the real filesystem.
//!
//! `uproot-core` takes a tree of files that lives inside the program (most
//! commonly embedded at build time) and copies it to a real directory, so
//! that code which only understands filesystem paths can consume it. A
//! process-wide temp directory is available as a default destination and
//! can be removed again once the files are no longer needed.
//!
//! Any backing store works as long as it implements [`VirtualTree`]:
//! [`MemoryTree`] for owned in-memory data, [`DirTree`] for a directory on
//! disk, and `include_dir::Dir` for trees embedded at build time.
//!
//! # Feature flags
//!
//! - `include-dir` (default): implements [`VirtualTree`] for
//!   `include_dir::Dir`. Its tests run with a plain `cargo test`; disable
//!   it with `--no-default-features` when nothing is embedded.
//!
//! # Examples
//!
//! ```no_run
//! use uproot_core::MemoryTree;
//! use uproot_core::Uproot;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = MemoryTree::from_files([("templates/index.html", "<html></html>")])?;
//! let uproot = Uproot::new(&tree)?;
//!
//! let report = uproot.copy_to_temp()?;
//! println!("Wrote {} files to {}", report.files_written, uproot.temp_dir().display());
//!
//! uproot.remove_temp()?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod report;
pub mod tree;

// Re-export main API types
pub use config::UprootConfig;
pub use error::ErrorKind;
pub use error::Result;
pub use error::UprootError;
pub use extractor::Uproot;
pub use report::CopyReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;

// Re-export tree types for easier access
pub use tree::DirTree;
pub use tree::MemoryTree;
pub use tree::TreeEntry;
pub use tree::VirtualTree;
