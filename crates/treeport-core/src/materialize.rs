//! Materialization: [`Node`] tree to disk
//!
//! Additive and overwriting, never deleting: folders are created, files are
//! created or overwritten, and anything on disk the tree does not name is
//! left untouched.

use std::path::{Path, PathBuf};

use treeport_fs::io;

use crate::node::Node;
use crate::Result;

/// Write a tree under `base`. The root node becomes `base/<root name>`.
pub fn write_tree(root: &Node, base: &Path) -> Result<()> {
    let mut stack: Vec<(PathBuf, &Node)> = vec![(base.to_path_buf(), root)];
    while let Some((dir, node)) = stack.pop() {
        let target = dir.join(node.name());
        match node {
            Node::Folder { children, .. } => {
                io::create_folder(&target)?;
                for child in children.iter().rev() {
                    stack.push((target.clone(), child));
                }
            }
            Node::File { content, .. } => {
                io::write_text(&target, content)?;
            }
        }
    }
    Ok(())
}
