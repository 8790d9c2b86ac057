//! Error types for treeport-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the tree model / walk layer
    #[error(transparent)]
    Core(#[from] treeport_core::Error),

    /// Error from the codec
    #[error(transparent)]
    Codec(#[from] treeport_codec::Error),

    /// Error from the patch engine or dispatcher
    #[error(transparent)]
    Patch(#[from] treeport_patch::Error),

    /// Error from the filesystem layer
    #[error(transparent)]
    Fs(#[from] treeport_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Clipboard access error
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
