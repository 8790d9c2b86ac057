//! Filesystem collaborators for treeport
//!
//! Provides portable path handling, the I/O primitives the tree engine is
//! built on, and the persisted user configuration (global ignore patterns).

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{Config, DEFAULT_IGNORE_PATTERNS};
pub use error::{Error, Result};
pub use path::PortablePath;
