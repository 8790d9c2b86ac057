//! Format auto-detection

use treeport_core::Node;

use crate::{Error, Result, v1, v2};

/// Parse an artifact of unknown format.
///
/// V1 is attempted first: its validation is strict and cheap and cannot
/// false-positive on V2 text. When both parsers reject the input the caller
/// gets one generic unrecognized-format error, not a composite of the two
/// internal failures.
pub fn deserialize(text: &str) -> Result<Node> {
    match v1::parse(text) {
        Ok(root) => return Ok(root),
        Err(e) => tracing::debug!("input is not a v1 artifact: {e}"),
    }
    match v2::parse(text) {
        Ok(root) => return Ok(root),
        Err(e) => tracing::debug!("input is not a v2 artifact: {e}"),
    }
    Err(Error::Unrecognized)
}
