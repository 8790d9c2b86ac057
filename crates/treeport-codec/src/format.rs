//! Serialization format selection

use treeport_core::Node;

use crate::{Result, v1, v2};

/// The two artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    V1,
    /// Hybrid text format; the default for new artifacts.
    #[default]
    V2,
}

impl Format {
    /// Serialize a tree in this format.
    pub fn serialize(&self, root: &Node) -> Result<String> {
        match self {
            Self::V1 => v1::serialize(root),
            Self::V2 => Ok(v2::serialize(root)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}
