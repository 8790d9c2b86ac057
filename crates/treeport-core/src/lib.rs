//! Tree model and disk walk for treeport
//!
//! A [`Node`] is the canonical in-memory form of a folder/file hierarchy.
//! Trees are built from disk by [`walk::read_tree`] (the filter engine
//! decides which entries become nodes) and written back by
//! [`materialize::write_tree`].

pub mod error;
pub mod filter;
pub mod materialize;
pub mod node;
pub mod walk;

pub use error::{Error, Result};
pub use filter::{NameFilter, RuleKind, RuleSet, RULE_FILE_NAME};
pub use materialize::write_tree;
pub use node::Node;
pub use walk::read_tree;
