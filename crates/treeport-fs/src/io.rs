//! File I/O collaborators
//!
//! The tree engine only touches disk through these functions. Writes use the
//! write-to-temp-then-rename strategy with an advisory lock so a failed write
//! never leaves a half-written file behind.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Sentinel stored in place of content that does not decode as UTF-8.
pub const BINARY_CONTENT_SENTINEL: &str = "[Binary file - content not readable as text]";

/// List the entry names of a directory in lexicographic ascending order.
pub fn list_entry_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Read a file as text, substituting sentinels for unreadable content.
///
/// Non-UTF-8 content yields [`BINARY_CONTENT_SENTINEL`]; an I/O failure
/// yields an error sentinel naming the reason. Capture is best-effort and
/// never aborts a walk over one unreadable file.
pub fn read_file_content(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => BINARY_CONTENT_SENTINEL.to_string(),
        },
        Err(e) => format!("[Error reading file: {e}]"),
    }
}

/// Read a file as UTF-8 text, failing on any error.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file.
///
/// Writes to a temp file in the same directory, locks it while writing, then
/// renames it over the target.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Write text content to a file atomically, creating parent folders.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Create a folder (and any missing ancestors); existing folders are fine.
pub fn create_folder(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}
