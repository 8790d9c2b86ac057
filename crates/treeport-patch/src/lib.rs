//! Patch engine and input dispatcher for treeport
//!
//! Applies patch descriptors against an existing directory (whole-structure
//! overwrite, line-range replacement, unified-diff application with
//! path-prefix inference) and dispatches arbitrary pasted text to the right
//! strategy.

pub mod blocks;
pub mod descriptor;
pub mod diffset;
pub mod dispatch;
pub mod engine;
pub mod error;

pub use descriptor::Patch;
pub use dispatch::{Applied, apply_input};
pub use error::{Error, Result};
