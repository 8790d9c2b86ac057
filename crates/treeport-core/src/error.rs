//! Error types for treeport-core

use std::path::PathBuf;

/// Result type for treeport-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in treeport-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Fs(#[from] treeport_fs::Error),
}
