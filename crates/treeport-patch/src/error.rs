//! Error types for treeport-patch

use std::path::PathBuf;

/// Result type for treeport-patch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying patches
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {path}")]
    TargetNotFound { path: PathBuf },

    #[error(
        "Line range {start_line}-{end_line} is out of bounds for {path} ({line_count} lines)"
    )]
    RangeOutOfBounds {
        path: PathBuf,
        start_line: usize,
        end_line: usize,
        line_count: usize,
    },

    #[error("Hunks do not apply to {path} (strip count {strip})")]
    ApplyConflict { path: PathBuf, strip: usize },

    #[error("Not a unified diff: {message}")]
    DiffParse { message: String },

    #[error("Malformed {path:?} block: {reason}")]
    MalformedBlock { path: String, reason: String },

    #[error("Input matches no known strategy (structure, diff, or block commands)")]
    UnrecognizedInput,

    #[error(transparent)]
    Fs(#[from] treeport_fs::Error),

    #[error(transparent)]
    Tree(#[from] treeport_core::Error),
}

impl Error {
    pub fn diff_parse(message: impl Into<String>) -> Self {
        Self::DiffParse {
            message: message.into(),
        }
    }

    pub fn malformed_block(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedBlock {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
