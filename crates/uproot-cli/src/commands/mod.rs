//! Subcommand implementations.

pub mod clean;
pub mod completion;
pub mod extract;
pub mod list;

use anyhow::Context;
use anyhow::Result;
use std::path::Path;
use uproot_core::DirTree;

/// Opens `source` as a read-only tree.
fn open_source(source: &Path) -> Result<DirTree> {
    DirTree::new(source).with_context(|| format!("cannot open source '{}'", source.display()))
}
