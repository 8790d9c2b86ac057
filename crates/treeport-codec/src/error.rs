//! Error types for treeport-codec

/// Result type for treeport-codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding artifacts
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not valid structured text: {message}")]
    Syntax { message: String },

    #[error("Top-level value is not an object")]
    NotAnObject,

    #[error("Format marker does not match {expected:?}")]
    MarkerMismatch { expected: &'static str },

    #[error("Missing `data` field")]
    MissingData,

    #[error("Missing header line {expected:?}")]
    MissingHeader { expected: &'static str },

    #[error("File block for {path:?} is never closed")]
    UnterminatedBlock { path: String },

    #[error("Entry {path:?} conflicts with an existing entry")]
    ConflictingEntry { path: String },

    #[error("File path {path:?} does not share the common root segment")]
    NoCommonRoot { path: String },

    #[error("Artifact contains no file blocks and no tree listing")]
    EmptyArtifact,

    #[error("Unrecognized artifact format (neither v1 nor v2)")]
    Unrecognized,
}

impl Error {
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }
}
