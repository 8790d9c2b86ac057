//! Tests for building trees from disk

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use treeport_core::{Error, Node, read_tree};
use treeport_fs::io::BINARY_CONTENT_SENTINEL;

fn no_ignores() -> Vec<String> {
    Vec::new()
}

#[test]
fn test_read_tree_missing_path_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result = read_tree(&temp.path().join("absent"), &no_ignores());
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_read_tree_single_file_root() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("note.txt");
    fs::write(&file, "hello\n").unwrap();

    let tree = read_tree(&file, &no_ignores()).unwrap();
    assert_eq!(tree, Node::file("note.txt", "hello\n"));
}

#[test]
fn test_read_tree_children_are_lexicographic() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("zeta.txt"), "z").unwrap();
    fs::write(root.join("alpha.txt"), "a").unwrap();
    fs::create_dir(root.join("mid")).unwrap();

    let tree = read_tree(&root, &no_ignores()).unwrap();
    let names: Vec<&str> = tree.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["alpha.txt", "mid", "zeta.txt"]);
}

#[test]
fn test_read_tree_nested_folders_and_content() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir_all(root.join("src").join("deep")).unwrap();
    fs::write(root.join("src").join("main.rs"), "fn main() {}\n").unwrap();
    fs::write(root.join("src").join("deep").join("x.txt"), "x\n").unwrap();

    let tree = read_tree(&root, &no_ignores()).unwrap();
    let entries = tree.file_entries();
    let paths: Vec<&str> = entries.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(paths, vec!["proj/src/deep/x.txt", "proj/src/main.rs"]);
}

#[test]
fn test_read_tree_binary_file_gets_sentinel() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("blob.bin"), [0x00, 0xff, 0xfe]).unwrap();

    let tree = read_tree(&root, &no_ignores()).unwrap();
    assert_eq!(
        tree.children()[0],
        Node::file("blob.bin", BINARY_CONTENT_SENTINEL)
    );
}

#[test]
fn test_global_ignore_prunes_folder_without_descending() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir_all(root.join(".git").join("objects")).unwrap();
    fs::write(root.join(".git").join("HEAD"), "ref").unwrap();
    fs::write(root.join("kept.txt"), "k").unwrap();

    let tree = read_tree(&root, &[".git".to_string()]).unwrap();
    let names: Vec<&str> = tree.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["kept.txt"]);
}

#[test]
fn test_global_ignore_matches_base_name_glob() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("cache.pyc"), "c").unwrap();
    fs::write(root.join("main.py"), "m").unwrap();

    let tree = read_tree(&root, &["*.pyc".to_string()]).unwrap();
    let names: Vec<&str> = tree.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["main.py"]);
}

#[test]
fn test_empty_directory_yields_empty_folder() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("empty");
    fs::create_dir(&root).unwrap();

    let tree = read_tree(&root, &no_ignores()).unwrap();
    assert_eq!(tree, Node::folder("empty"));
}
