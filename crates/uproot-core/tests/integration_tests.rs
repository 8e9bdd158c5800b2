//! Integration tests for uproot-core.
//!
//! These tests verify end-to-end workflows with real filesystem operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use uproot_core::DirTree;
use uproot_core::ErrorKind;
use uproot_core::MemoryTree;
use uproot_core::Uproot;
use uproot_core::UprootConfig;
use uproot_core::VirtualTree;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("assets")
}

fn sample_tree() -> MemoryTree {
    MemoryTree::from_files([("a.txt", "alpha"), ("sub/b.txt", "bravo")])
        .expect("failed to build tree")
}

/// Each test that touches the shared temp area gets its own directory name.
fn isolated_config(test_name: &str) -> UprootConfig {
    UprootConfig::default().temp_dir_name(format!(
        "uproot-it-{test_name}-{}",
        std::process::id()
    ))
}

#[test]
fn test_files_scenario_walk_order() {
    let tree = sample_tree();
    let uproot = Uproot::new(&tree).unwrap();
    assert_eq!(uproot.files(), ["a.txt", "sub/b.txt"]);
}

#[test]
fn test_copy_to_scenario_creates_missing_subdirectory() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let tree = sample_tree();
    let uproot = Uproot::new(&tree).unwrap();

    assert!(!out.join("sub").exists());
    uproot.copy_to(&out).unwrap();

    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "alpha");
    assert!(out.join("sub").is_dir());
    assert_eq!(
        fs::read_to_string(out.join("sub").join("b.txt")).unwrap(),
        "bravo"
    );
}

#[test]
fn test_copy_is_additive() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("c.txt"), "unrelated").unwrap();
    let tree = sample_tree();
    let uproot = Uproot::new(&tree).unwrap();

    uproot.copy_to(temp.path()).unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("c.txt")).unwrap(),
        "unrelated"
    );
    assert!(temp.path().join("a.txt").is_file());
}

#[test]
fn test_repeated_copy_is_safe() {
    let temp = TempDir::new().unwrap();
    let tree = sample_tree();
    let uproot = Uproot::new(&tree).unwrap();

    let first = uproot.copy_to(temp.path()).unwrap();
    let second = uproot.copy_to(temp.path()).unwrap();

    assert_eq!(first.files_written, second.files_written);
    assert_eq!(second.directories_created, 0);
    assert_eq!(
        fs::read_to_string(temp.path().join("sub").join("b.txt")).unwrap(),
        "bravo"
    );
}

#[test]
fn test_temp_dir_default_formula() {
    let tree = sample_tree();
    let uproot = Uproot::new(&tree).unwrap();
    let expected = std::env::temp_dir().join("uproot-fs");
    assert_eq!(uproot.temp_dir(), expected);
    assert_eq!(uproot.temp_dir(), uproot.temp_dir());
}

#[test]
fn test_copy_to_temp_then_remove() {
    let tree = sample_tree();
    let uproot = Uproot::with_config(&tree, isolated_config("copy-remove")).unwrap();

    uproot.copy_to_temp().unwrap();
    assert!(uproot.temp_dir().is_dir());
    for file in uproot.files() {
        assert!(uproot.temp_dir().join(file).is_file(), "{file} should exist");
    }

    uproot.remove_temp().unwrap();
    assert!(!uproot.temp_dir().exists());

    // Idempotent
    uproot.remove_temp().unwrap();
    assert!(!uproot.temp_dir().exists());
}

#[test]
fn test_remove_temp_before_copy() {
    let tree = sample_tree();
    let uproot = Uproot::with_config(&tree, isolated_config("remove-first")).unwrap();
    assert!(uproot.remove_temp().is_ok());
}

#[test]
fn test_drop_keeps_copied_files() {
    let temp = TempDir::new().unwrap();
    let tree = sample_tree();
    {
        let uproot = Uproot::new(&tree).unwrap();
        uproot.copy_to(temp.path()).unwrap();
    }
    assert!(temp.path().join("a.txt").is_file());
}

#[test]
fn test_dir_tree_round_trip() {
    let tree = DirTree::new(fixture_root()).unwrap();
    let uproot = Uproot::new(&tree).unwrap();
    assert_eq!(uproot.files(), ["a.txt", "sub/b.txt"]);

    let temp = TempDir::new().unwrap();
    uproot.copy_to(temp.path()).unwrap();

    for file in uproot.files() {
        let expected = tree.read(file).unwrap();
        let actual = fs::read(temp.path().join(file)).unwrap();
        assert_eq!(&*expected, actual.as_slice(), "content of {file}");
    }
}

#[test]
fn test_copy_into_file_destination_fails() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let tree = sample_tree();
    let uproot = Uproot::new(&tree).unwrap();

    let err = uproot.copy_to(&blocker).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Write);
}

#[test]
#[cfg(unix)]
fn test_remove_temp_blocked() {
    use std::os::unix::fs::PermissionsExt;

    let tree = sample_tree();
    let uproot = Uproot::with_config(&tree, isolated_config("remove-blocked")).unwrap();
    uproot.copy_to_temp().unwrap();

    let sub = uproot.temp_dir().join("sub");
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o555)).unwrap();

    let result = uproot.remove_temp();

    // Gone already when running as root
    let _ = fs::set_permissions(&sub, fs::Permissions::from_mode(0o755));
    let cleanup = uproot.remove_temp();

    if let Err(err) = result {
        assert_eq!(err.kind(), ErrorKind::Delete);
        assert_eq!(err.path(), uproot.temp_dir());
    }
    cleanup.unwrap();
    assert!(!uproot.temp_dir().exists());
}

#[cfg(unix)]
#[test]
fn test_dir_tree_with_fifo_lists_and_copies_regular_files_only() {
    use std::process::Command;

    let source = TempDir::new().unwrap();
    fs::write(source.path().join("a.txt"), "alpha").unwrap();
    let made = Command::new("mkfifo")
        .arg(source.path().join("pipe"))
        .status()
        .is_ok_and(|status| status.success());
    if !made {
        return;
    }

    let tree = DirTree::new(source.path()).unwrap();
    let uproot = Uproot::new(&tree).unwrap();
    assert_eq!(uproot.files(), ["a.txt"]);

    let dest = TempDir::new().unwrap();
    let report = uproot.copy_to(dest.path()).unwrap();
    assert_eq!(report.files_written, 1);
    assert!(!dest.path().join("pipe").exists());
}

#[test]
fn test_unsafe_temp_dir_name_never_reaches_remove() {
    let system_temp = std::env::temp_dir();
    let marker = TempDir::new_in(&system_temp).unwrap();
    let tree = sample_tree();

    for bad in ["", "..", "/etc", "../escaped"] {
        let config = UprootConfig::default().temp_dir_name(bad);
        let err = Uproot::with_config(&tree, config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config, "{bad:?}");
    }

    assert!(system_temp.is_dir());
    assert!(marker.path().is_dir());
}

#[cfg(feature = "include-dir")]
mod embedded {
    use super::*;
    use include_dir::Dir;
    use include_dir::include_dir;

    static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/assets");

    #[test]
    fn test_embedded_copy_matches_fixture() {
        let uproot = Uproot::new(&ASSETS).unwrap();
        assert_eq!(uproot.files(), ["a.txt", "sub/b.txt"]);

        let temp = TempDir::new().unwrap();
        uproot.copy_to(temp.path()).unwrap();
        assert_eq!(
            fs::read(temp.path().join("sub").join("b.txt")).unwrap(),
            fs::read(fixture_root().join("sub").join("b.txt")).unwrap()
        );
    }
}
