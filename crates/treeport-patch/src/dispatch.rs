//! Input dispatcher
//!
//! Given arbitrary pasted or loaded text and a destination directory, pick
//! exactly one strategy in fixed priority order: full structure, then a
//! single unified diff, then block commands. Each attempt is terminal on
//! success and no strategy is revisited.

use std::path::Path;

use treeport_fs::{PortablePath, io};

use crate::blocks::{self, BlockKind};
use crate::{Error, Result, diffset, engine};

/// Which strategy accepted the input, with a little reporting detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A full structure artifact was materialized.
    Structure { root: String },
    /// A unified diff was applied to `files` files.
    Diff { files: usize },
    /// `count` command blocks were executed.
    Blocks { count: usize },
}

/// Decide and execute one strategy for the input.
pub fn apply_input(text: &str, destination: &Path) -> Result<Applied> {
    // Strategy 1: the codec recognizes the whole input as a tree artifact
    match treeport_codec::deserialize(text) {
        Ok(root) => {
            let name = root.name().to_string();
            engine::apply_full_structure(&root, destination)?;
            return Ok(Applied::Structure { root: name });
        }
        Err(e) => tracing::debug!("not a structure artifact: {e}"),
    }

    // Strategy 2: the whole input is one unified diff patch set. A diff
    // that parses but fails to apply is fatal here; it never falls through
    // to block scanning.
    let stripped = blocks::strip_code_fences(text);
    match diffset::parse_patch_set(&stripped) {
        Ok(set) => {
            for file_patch in &set {
                engine::apply_file_patch(destination, file_patch, None)?;
            }
            return Ok(Applied::Diff { files: set.len() });
        }
        Err(e) => tracing::debug!("not a unified diff: {e}"),
    }

    // Strategy 3: block commands, processed in input order. The first
    // failing block aborts the rest; earlier blocks stay applied.
    let found = blocks::scan_blocks(text);
    if found.is_empty() {
        return Err(Error::UnrecognizedInput);
    }
    let count = found.len();
    for block in found {
        match block.kind {
            BlockKind::File => {
                let body = blocks::strip_code_fences(&block.body);
                let target = PortablePath::new(&block.path).to_native_under(destination);
                io::write_text(&target, &body)?;
            }
            BlockKind::Patch => {
                let patch = blocks::parse_patch_block(&block.path, &block.body)?;
                engine::apply(destination, &patch)?;
            }
            BlockKind::Diff => {
                let body = blocks::strip_code_fences(&block.body);
                engine::apply_unified_diff(destination, Some(&block.path), &body)?;
            }
        }
    }
    Ok(Applied::Blocks { count })
}
