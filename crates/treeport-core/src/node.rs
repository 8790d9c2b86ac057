//! The tree model

use serde::{Deserialize, Serialize};
use treeport_fs::PortablePath;

/// One entry in the in-memory tree: a folder with ordered children, or a
/// file with text content.
///
/// Sibling names are unique regardless of kind; trees built from disk order
/// children lexicographically by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder { name: String, children: Vec<Node> },
    File { name: String, content: String },
}

impl Node {
    /// Create a folder node with no children.
    pub fn folder(name: impl Into<String>) -> Self {
        Self::Folder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a file node.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The node's own name (a single path segment).
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::File { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Children of a folder; empty slice for a file.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Folder { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    /// All files in the tree as (path, content) pairs, paths rooted at this
    /// node's name, in tree order.
    ///
    /// Uses an explicit work stack so adversarially deep trees cannot
    /// exhaust the call stack.
    pub fn file_entries(&self) -> Vec<(PortablePath, &str)> {
        let mut entries = Vec::new();
        let mut stack = vec![(PortablePath::new(""), self)];
        while let Some((prefix, node)) = stack.pop() {
            let path = prefix.join(node.name());
            match node {
                Self::File { content, .. } => entries.push((path, content.as_str())),
                Self::Folder { children, .. } => {
                    // Reverse so the stack pops children in tree order
                    for child in children.iter().rev() {
                        stack.push((path.clone(), child));
                    }
                }
            }
        }
        entries
    }
}
