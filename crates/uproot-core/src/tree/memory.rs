//! Owned in-memory tree.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io;

use super::TreeEntry;
use super::VirtualTree;
use super::validate_tree_path;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(Vec<u8>),
    Dir(BTreeMap<String, Node>),
}

/// A tree held entirely in memory.
///
/// Intermediate directories are created implicitly when a file is inserted.
/// Children are walked in byte-wise name order.
///
/// # Examples
///
/// ```
/// use uproot_core::MemoryTree;
/// use uproot_core::VirtualTree;
///
/// # fn main() -> std::io::Result<()> {
/// let tree = MemoryTree::from_files([("a.txt", "alpha"), ("sub/b.txt", "bravo")])?;
/// assert_eq!(&*tree.read("sub/b.txt")?, b"bravo");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTree {
    root: BTreeMap<String, Node>,
}

impl MemoryTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from `(path, content)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is malformed or collides with an entry of
    /// the other kind.
    pub fn from_files<I, P, C>(files: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<Vec<u8>>,
    {
        let mut tree = Self::new();
        for (path, content) in files {
            tree.insert_file(path.as_ref(), content)?;
        }
        Ok(tree)
    }

    /// Inserts or replaces a file, creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is malformed, a parent is a file, or the
    /// path itself is an existing directory.
    pub fn insert_file(&mut self, path: &str, content: impl Into<Vec<u8>>) -> io::Result<()> {
        validate_tree_path(path)?;
        let (parents, name) = match path.rsplit_once('/') {
            Some((parents, name)) => (Some(parents), name),
            None => (None, path),
        };
        let dir = match parents {
            Some(parents) => self.dir_mut(parents)?,
            None => &mut self.root,
        };
        if let Some(Node::Dir(_)) = dir.get(name) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("a directory already exists at '{path}'"),
            ));
        }
        dir.insert(name.to_string(), Node::File(content.into()));
        Ok(())
    }

    /// Inserts a directory (and its parents) if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is malformed or crosses an existing file.
    pub fn insert_dir(&mut self, path: &str) -> io::Result<()> {
        validate_tree_path(path)?;
        self.dir_mut(path).map(|_| ())
    }

    /// Returns the number of files in the tree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        fn count(children: &BTreeMap<String, Node>) -> usize {
            children
                .values()
                .map(|node| match node {
                    Node::File(_) => 1,
                    Node::Dir(children) => count(children),
                })
                .sum()
        }
        count(&self.root)
    }

    /// Returns `true` if the tree has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    fn dir_mut(&mut self, path: &str) -> io::Result<&mut BTreeMap<String, Node>> {
        let mut current = &mut self.root;
        for segment in path.split('/') {
            let node = current
                .entry(segment.to_string())
                .or_insert_with(|| Node::Dir(BTreeMap::new()));
            current = match node {
                Node::Dir(children) => children,
                Node::File(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("a file already exists at '{segment}' in '{path}'"),
                    ));
                }
            };
        }
        Ok(current)
    }

    fn node(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('/');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            match node {
                Node::Dir(children) => node = children.get(segment)?,
                Node::File(_) => return None,
            }
        }
        Some(node)
    }
}

fn collect(prefix: &str, children: &BTreeMap<String, Node>, out: &mut Vec<TreeEntry>) {
    for (name, node) in children {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };
        match node {
            Node::File(_) => out.push(TreeEntry::file(path)),
            Node::Dir(grandchildren) => {
                out.push(TreeEntry::dir(path.clone()));
                collect(&path, grandchildren, out);
            }
        }
    }
}

impl VirtualTree for MemoryTree {
    fn walk(&self) -> Box<dyn Iterator<Item = io::Result<TreeEntry>> + '_> {
        let mut entries = Vec::new();
        collect("", &self.root, &mut entries);
        Box::new(entries.into_iter().map(Ok))
    }

    fn read(&self, path: &str) -> io::Result<Cow<'_, [u8]>> {
        match self.node(path) {
            Some(Node::File(content)) => Ok(Cow::Borrowed(content.as_slice())),
            Some(Node::Dir(_)) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("'{path}' is a directory"),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{path}' not found in tree"),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn walk_paths(tree: &MemoryTree) -> Vec<(String, bool)> {
        tree.walk()
            .map(|entry| {
                let entry = entry.unwrap();
                (entry.path, entry.is_dir)
            })
            .collect()
    }

    #[test]
    fn test_walk_depth_first_name_order() {
        let tree = MemoryTree::from_files([
            ("z.txt", "z"),
            ("sub/b.txt", "b"),
            ("a.txt", "a"),
            ("sub/deeper/c.txt", "c"),
        ])
        .unwrap();

        assert_eq!(
            walk_paths(&tree),
            vec![
                ("a.txt".to_string(), false),
                ("sub".to_string(), true),
                ("sub/b.txt".to_string(), false),
                ("sub/deeper".to_string(), true),
                ("sub/deeper/c.txt".to_string(), false),
                ("z.txt".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_directory_before_sibling_with_longer_name() {
        let tree = MemoryTree::from_files([("a.txt", "1"), ("a/inner", "2")]).unwrap();
        let paths: Vec<_> = walk_paths(&tree).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["a", "a/inner", "a.txt"]);
    }

    #[test]
    fn test_read_file() {
        let tree = MemoryTree::from_files([("sub/b.txt", b"\x00\xffbin".to_vec())]).unwrap();
        assert_eq!(&*tree.read("sub/b.txt").unwrap(), b"\x00\xffbin");
    }

    #[test]
    fn test_read_missing_and_directory() {
        let tree = MemoryTree::from_files([("sub/b.txt", "b")]).unwrap();
        assert_eq!(
            tree.read("nope").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert_eq!(
            tree.read("sub/b.txt/x").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert_eq!(
            tree.read("sub").unwrap_err().kind(),
            io::ErrorKind::IsADirectory
        );
    }

    #[test]
    fn test_insert_replaces_file() {
        let mut tree = MemoryTree::new();
        tree.insert_file("a.txt", "old").unwrap();
        tree.insert_file("a.txt", "new").unwrap();
        assert_eq!(&*tree.read("a.txt").unwrap(), b"new");
        assert_eq!(tree.file_count(), 1);
    }

    #[test]
    fn test_insert_collisions() {
        let mut tree = MemoryTree::from_files([("a", "file")]).unwrap();
        assert!(tree.insert_file("a/b", "x").is_err());
        tree.insert_dir("d").unwrap();
        assert!(tree.insert_file("d", "x").is_err());
    }

    #[test]
    fn test_insert_rejects_malformed_path() {
        let mut tree = MemoryTree::new();
        assert!(tree.insert_file("../escape", "x").is_err());
        assert!(tree.insert_file("/abs", "x").is_err());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_empty_directory_walked() {
        let mut tree = MemoryTree::new();
        tree.insert_dir("empty/nested").unwrap();
        assert_eq!(
            walk_paths(&tree),
            vec![
                ("empty".to_string(), true),
                ("empty/nested".to_string(), true),
            ]
        );
        assert_eq!(tree.file_count(), 0);
    }
}
