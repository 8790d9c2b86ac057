//! Patch descriptor types

use treeport_core::Node;

/// One mutation against an existing directory tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Replace an inclusive 1-based line range of one file.
    ReplaceLines {
        path: String,
        start_line: usize,
        end_line: usize,
        new_content: String,
    },
    /// Apply a unified-diff patch set. `path_hint` backs up diffs whose
    /// headers carry no usable file name.
    UnifiedDiff {
        path_hint: Option<String>,
        diff_text: String,
    },
    /// Materialize a whole tree.
    FullStructure { root: Node },
}
