//! Compile-time embedded trees from `include_dir`.

use std::borrow::Cow;
use std::io;

use include_dir::Dir;
use include_dir::DirEntry;

use super::TreeEntry;
use super::VirtualTree;
use super::to_tree_path;

fn collect(dir: &Dir<'_>, out: &mut Vec<io::Result<TreeEntry>>) {
    let mut children: Vec<&DirEntry<'_>> = dir.entries().iter().collect();
    children.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));

    for child in children {
        let path = match to_tree_path(child.path()) {
            Ok(path) => path,
            Err(e) => {
                out.push(Err(e));
                continue;
            }
        };
        match child {
            DirEntry::Dir(sub) => {
                out.push(Ok(TreeEntry::dir(path)));
                collect(sub, out);
            }
            DirEntry::File(_) => out.push(Ok(TreeEntry::file(path))),
        }
    }
}

/// Walks a directory embedded with `include_dir!`.
///
/// ```ignore
/// use include_dir::{Dir, include_dir};
/// use uproot_core::Uproot;
///
/// static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");
///
/// let uproot = Uproot::new(&ASSETS)?;
/// uproot.copy_to_temp()?;
/// ```
impl VirtualTree for Dir<'_> {
    fn walk(&self) -> Box<dyn Iterator<Item = io::Result<TreeEntry>> + '_> {
        let mut entries = Vec::new();
        collect(self, &mut entries);
        Box::new(entries.into_iter())
    }

    fn read(&self, path: &str) -> io::Result<Cow<'_, [u8]>> {
        self.get_file(path)
            .map(|file| Cow::Borrowed(file.contents()))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("'{path}' not found in embedded tree"),
                )
            })
    }
}
