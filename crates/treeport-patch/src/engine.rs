//! Patch application
//!
//! All operations fail loudly on detectable precondition violations and
//! never leave a partially-rewritten file behind: content is prepared in
//! memory and written in one atomic rewrite.

use std::path::Path;

use treeport_core::{Node, write_tree};
use treeport_fs::{PortablePath, io};

use crate::descriptor::Patch;
use crate::diffset::{self, FilePatch};
use crate::{Error, Result};

/// Apply one patch descriptor against a base directory.
pub fn apply(base_dir: &Path, patch: &Patch) -> Result<()> {
    match patch {
        Patch::ReplaceLines {
            path,
            start_line,
            end_line,
            new_content,
        } => replace_lines(base_dir, path, *start_line, *end_line, new_content),
        Patch::UnifiedDiff {
            path_hint,
            diff_text,
        } => apply_unified_diff(base_dir, path_hint.as_deref(), diff_text).map(|_| ()),
        Patch::FullStructure { root } => apply_full_structure(root, base_dir),
    }
}

/// Replace the inclusive 1-based range `[start_line, end_line]` of a file.
///
/// The file must exist and the range must lie within it; nothing is written
/// otherwise. Lines are rejoined with a single trailing newline.
pub fn replace_lines(
    base_dir: &Path,
    path: &str,
    start_line: usize,
    end_line: usize,
    new_content: &str,
) -> Result<()> {
    let target = PortablePath::new(path).to_native_under(base_dir);
    if !target.is_file() {
        return Err(Error::TargetNotFound { path: target });
    }

    let original = io::read_text(&target)?;
    let lines: Vec<&str> = original.lines().collect();
    let line_count = lines.len();
    if start_line < 1 || end_line < start_line || end_line > line_count {
        return Err(Error::RangeOutOfBounds {
            path: target,
            start_line,
            end_line,
            line_count,
        });
    }

    let replacement: Vec<&str> = new_content.lines().collect();
    let mut result = Vec::with_capacity(line_count - (end_line - start_line + 1) + replacement.len());
    result.extend_from_slice(&lines[..start_line - 1]);
    result.extend_from_slice(&replacement);
    result.extend_from_slice(&lines[end_line..]);

    let mut rewritten = result.join("\n");
    rewritten.push('\n');
    io::write_text(&target, &rewritten)?;
    Ok(())
}

/// Parse and apply a unified-diff patch set rooted at `base_dir`.
///
/// Returns the number of files patched.
pub fn apply_unified_diff(
    base_dir: &Path,
    path_hint: Option<&str>,
    diff_text: &str,
) -> Result<usize> {
    let set = diffset::parse_patch_set(diff_text)?;
    for file_patch in &set {
        apply_file_patch(base_dir, file_patch, path_hint)?;
    }
    Ok(set.len())
}

/// Apply one file's patch, inferring how many leading path segments of the
/// recorded target to strip.
pub(crate) fn apply_file_patch(
    base_dir: &Path,
    file_patch: &FilePatch,
    path_hint: Option<&str>,
) -> Result<()> {
    let parsed = diffy::Patch::from_str(&file_patch.text)
        .map_err(|e| Error::diff_parse(e.to_string()))?;

    let recorded = match (file_patch.target.as_deref(), path_hint) {
        (Some(target), _) => PortablePath::new(target),
        (None, Some(hint)) => PortablePath::new(hint),
        (None, None) => return Err(Error::diff_parse("patch names no target file")),
    };

    let (strip, relative) = resolve_strip(base_dir, &recorded);
    tracing::debug!("applying diff to {relative} (strip count {strip})");
    let target = relative.to_native_under(base_dir);

    let original = if target.is_file() {
        io::read_text(&target)?
    } else {
        String::new()
    };

    let ending = LineEnding::detect(&original);
    let normalized = ending.normalize(&original);
    let patched = diffy::apply(&normalized, &parsed).map_err(|_| Error::ApplyConflict {
        path: target.clone(),
        strip,
    })?;
    io::write_text(&target, &ending.restore(patched))?;
    Ok(())
}

/// Probe strip counts from 0 upward; the first count whose stripped path
/// exists under `base_dir` wins. A diff creating a new file falls back to
/// stripping one segment when the base directory's own name equals the
/// recorded path's first segment.
fn resolve_strip(base_dir: &Path, recorded: &PortablePath) -> (usize, PortablePath) {
    for count in 0..recorded.segment_count() {
        if let Some(candidate) = recorded.strip_segments(count) {
            if candidate.to_native_under(base_dir).is_file() {
                return (count, candidate);
            }
        }
    }

    let base_name = base_dir.file_name().map(|n| n.to_string_lossy().into_owned());
    let strip = match (base_name.as_deref(), recorded.first_segment()) {
        (Some(base), Some(first)) if base == first => 1,
        _ => 0,
    };
    match recorded.strip_segments(strip) {
        Some(relative) => (strip, relative),
        None => (0, recorded.clone()),
    }
}

/// Materialize a parsed tree at a destination directory.
///
/// When the destination's own name equals the tree's root name the children
/// are written into the destination itself (via its parent) instead of
/// nesting a duplicate folder.
pub fn apply_full_structure(root: &Node, destination: &Path) -> Result<()> {
    let dest_name = destination.file_name().map(|n| n.to_string_lossy().into_owned());
    let base = if dest_name.as_deref() == Some(root.name()) {
        match destination.parent() {
            Some(parent) => parent.to_path_buf(),
            None => destination.to_path_buf(),
        }
    } else {
        destination.to_path_buf()
    };
    io::create_folder(&base)?;
    write_tree(root, &base)?;
    Ok(())
}

/// Dominant line-ending style of existing content; diffs are applied
/// against LF-normalized text and the style restored afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    fn normalize(&self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::CrLf => text.replace("\r\n", "\n"),
        }
    }

    fn restore(&self, text: String) -> String {
        match self {
            Self::Lf => text,
            Self::CrLf => text.replace('\n', "\r\n"),
        }
    }
}
