//! Text artifact formats for treeport
//!
//! Two formats serialize a tree to text and back: V1 is a strict structured
//! encoding, V2 a hybrid human-editable one. [`deserialize`] auto-detects
//! which format an input uses.

pub mod detect;
pub mod error;
pub mod format;
pub mod v1;
pub mod v2;

pub use detect::deserialize;
pub use error::{Error, Result};
pub use format::Format;
