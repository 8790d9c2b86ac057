//! Tests for the patch application engine

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;
use treeport_patch::engine::{apply_unified_diff, replace_lines};
use treeport_patch::Error;

fn write(base: &Path, rel: &str, content: &str) {
    let path = base.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_replace_lines_exact_splice() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "notes.txt", "one\ntwo\nthree\nfour\nfive\n");

    replace_lines(temp.path(), "notes.txt", 2, 4, "TWO\nTHREE\n").unwrap();

    let result = fs::read_to_string(temp.path().join("notes.txt")).unwrap();
    // 5 - 3 + 2 = 4 lines; lines outside [2,4] are untouched
    assert_eq!(result, "one\nTWO\nTHREE\nfive\n");
}

#[test]
fn test_replace_lines_single_line_with_many() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "alpha\nbeta\n");

    replace_lines(temp.path(), "a.txt", 1, 1, "a1\na2\na3").unwrap();

    let result = fs::read_to_string(temp.path().join("a.txt")).unwrap();
    assert_eq!(result, "a1\na2\na3\nbeta\n");
}

#[test]
fn test_replace_lines_start_zero_rejected_and_file_untouched() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "alpha\nbeta\n");

    let result = replace_lines(temp.path(), "a.txt", 0, 1, "x");
    assert!(matches!(result, Err(Error::RangeOutOfBounds { .. })));
    assert_eq!(
        fs::read_to_string(temp.path().join("a.txt")).unwrap(),
        "alpha\nbeta\n"
    );
}

#[test]
fn test_replace_lines_end_past_eof_rejected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "alpha\nbeta\n");

    let result = replace_lines(temp.path(), "a.txt", 1, 3, "x");
    match result {
        Err(Error::RangeOutOfBounds {
            start_line,
            end_line,
            line_count,
            ..
        }) => {
            assert_eq!((start_line, end_line, line_count), (1, 3, 2));
        }
        other => panic!("expected RangeOutOfBounds, got {other:?}"),
    }
}

#[rstest]
#[case(0, 0)]
#[case(0, 2)]
#[case(3, 2)]
#[case(2, 4)]
#[case(4, 4)]
fn test_replace_lines_invalid_ranges_rejected(#[case] start: usize, #[case] end: usize) {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.txt", "alpha\nbeta\ngamma\n");

    let result = replace_lines(temp.path(), "a.txt", start, end, "x");
    assert!(matches!(result, Err(Error::RangeOutOfBounds { .. })));
    assert_eq!(
        fs::read_to_string(temp.path().join("a.txt")).unwrap(),
        "alpha\nbeta\ngamma\n"
    );
}

#[test]
fn test_replace_lines_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = replace_lines(temp.path(), "absent.txt", 1, 1, "x");
    assert!(matches!(result, Err(Error::TargetNotFound { .. })));
}

#[test]
fn test_unified_diff_applies_in_place() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "file.txt", "alpha\nbeta\n");

    let diff = "\
--- a/file.txt
+++ b/file.txt
@@ -1,2 +1,2 @@
 alpha
-beta
+beta2
";
    let files = apply_unified_diff(temp.path(), None, diff).unwrap();
    assert_eq!(files, 1);
    assert_eq!(
        fs::read_to_string(temp.path().join("file.txt")).unwrap(),
        "alpha\nbeta2\n"
    );
}

#[test]
fn test_strip_inference_probes_existing_file() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/a.py", "print('old')\n");

    // Recorded path carries a project prefix the base already represents
    let diff = "\
--- proj/src/a.py
+++ proj/src/a.py
@@ -1 +1 @@
-print('old')
+print('new')
";
    apply_unified_diff(temp.path(), None, diff).unwrap();
    assert_eq!(
        fs::read_to_string(temp.path().join("src").join("a.py")).unwrap(),
        "print('new')\n"
    );
}

#[test]
fn test_strip_fallback_strips_base_name_for_new_files() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("proj");
    fs::create_dir(&base).unwrap();

    let diff = "\
--- /dev/null
+++ proj/fresh.txt
@@ -0,0 +1,2 @@
+line one
+line two
";
    apply_unified_diff(&base, None, diff).unwrap();
    assert_eq!(
        fs::read_to_string(base.join("fresh.txt")).unwrap(),
        "line one\nline two\n"
    );
}

#[test]
fn test_strip_fallback_keeps_path_when_names_differ() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("workspace");
    fs::create_dir(&base).unwrap();

    let diff = "\
--- /dev/null
+++ proj/fresh.txt
@@ -0,0 +1 @@
+hello
";
    apply_unified_diff(&base, None, diff).unwrap();
    assert_eq!(
        fs::read_to_string(base.join("proj").join("fresh.txt")).unwrap(),
        "hello\n"
    );
}

#[test]
fn test_conflicting_hunk_is_fatal_and_names_strip_count() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "file.txt", "entirely different content\n");

    let diff = "\
--- a/file.txt
+++ b/file.txt
@@ -1,2 +1,2 @@
 alpha
-beta
+beta2
";
    match apply_unified_diff(temp.path(), None, diff) {
        Err(Error::ApplyConflict { path, strip }) => {
            assert!(path.ends_with("file.txt"));
            assert_eq!(strip, 1);
        }
        other => panic!("expected ApplyConflict, got {other:?}"),
    }
    // Conflict leaves the file untouched
    assert_eq!(
        fs::read_to_string(temp.path().join("file.txt")).unwrap(),
        "entirely different content\n"
    );
}

#[test]
fn test_multi_file_diff_patches_each_target() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "one.txt", "old one\n");
    write(temp.path(), "two.txt", "old two\n");

    let diff = "\
diff --git a/one.txt b/one.txt
--- a/one.txt
+++ b/one.txt
@@ -1 +1 @@
-old one
+new one
diff --git a/two.txt b/two.txt
--- a/two.txt
+++ b/two.txt
@@ -1 +1 @@
-old two
+new two
";
    let files = apply_unified_diff(temp.path(), None, diff).unwrap();
    assert_eq!(files, 2);
    assert_eq!(
        fs::read_to_string(temp.path().join("one.txt")).unwrap(),
        "new one\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("two.txt")).unwrap(),
        "new two\n"
    );
}

#[test]
fn test_unified_diff_preserves_crlf_content() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "file.txt", "alpha\r\nbeta\r\n");

    let diff = "\
--- a/file.txt
+++ b/file.txt
@@ -1,2 +1,2 @@
 alpha
-beta
+beta2
";
    apply_unified_diff(temp.path(), None, diff).unwrap();
    assert_eq!(
        fs::read_to_string(temp.path().join("file.txt")).unwrap(),
        "alpha\r\nbeta2\r\n"
    );
}

#[test]
fn test_unparseable_diff_is_format_error() {
    let temp = TempDir::new().unwrap();
    let result = apply_unified_diff(temp.path(), None, "this is not a diff\n");
    assert!(matches!(result, Err(Error::DiffParse { .. })));
}
