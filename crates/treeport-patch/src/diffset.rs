//! Unified-diff patch sets
//!
//! `diffy` parses one file patch at a time, so multi-file diffs are first
//! split into per-file chunks. The splitter counts hunk lines from the
//! `@@` headers, which keeps deletion lines that happen to start with
//! `---` from being mistaken for a new file header.

use crate::{Error, Result};

/// One file's worth of a unified diff.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePatch {
    /// Target path exactly as recorded in the diff headers.
    pub target: Option<String>,
    /// Chunk text, parseable by `diffy::Patch::from_str`.
    pub text: String,
}

/// Parse diff text into a non-empty set of file patches.
///
/// The whole input must be a diff: file-header junk (`diff --git`, index
/// and mode lines) is tolerated between patches, but any other content, an
/// input yielding no chunks, or a chunk diffy rejects is an error.
pub fn parse_patch_set(diff_text: &str) -> Result<Vec<FilePatch>> {
    let scan = split_chunks(diff_text);
    if let Some(line) = scan.foreign_line {
        return Err(Error::diff_parse(format!(
            "input contains non-diff content: {line:?}"
        )));
    }
    let chunks = scan.chunks;
    if chunks.is_empty() {
        return Err(Error::diff_parse("no file patches found"));
    }

    let mut set = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let patch = diffy::Patch::from_str(&chunk)
            .map_err(|e| Error::diff_parse(e.to_string()))?;
        if patch.hunks().is_empty() {
            return Err(Error::diff_parse("file patch contains no hunks"));
        }
        let target = patch
            .modified()
            .or_else(|| patch.original())
            .map(str::to_owned);
        set.push(FilePatch {
            target,
            text: chunk,
        });
    }
    Ok(set)
}

struct ChunkScan {
    chunks: Vec<String>,
    /// First line that belongs to no file patch and is not header junk.
    foreign_line: Option<String>,
}

/// Split diff text into per-file chunks of `---`/`+++`/hunk lines.
fn split_chunks(text: &str) -> ChunkScan {
    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut foreign_line: Option<String> = None;
    let mut recording = false;
    let (mut old_remaining, mut new_remaining) = (0usize, 0usize);

    for line in text.lines() {
        if old_remaining > 0 || new_remaining > 0 {
            current.push(line);
            match line.as_bytes().first() {
                Some(b'+') => new_remaining = new_remaining.saturating_sub(1),
                Some(b'-') => old_remaining = old_remaining.saturating_sub(1),
                // "\ No newline at end of file"
                Some(b'\\') => {}
                _ => {
                    old_remaining = old_remaining.saturating_sub(1);
                    new_remaining = new_remaining.saturating_sub(1);
                }
            }
            continue;
        }

        if line.starts_with("--- ") {
            if let Some(chunk) = flush(&mut current) {
                chunks.push(chunk);
            }
            current.push(line);
            recording = true;
            continue;
        }

        if recording {
            if line.starts_with("+++ ") {
                current.push(line);
                continue;
            }
            if let Some((old_len, new_len)) = parse_hunk_header(line) {
                current.push(line);
                old_remaining = old_len;
                new_remaining = new_len;
                continue;
            }
            // Anything else ends the file patch
            if let Some(chunk) = flush(&mut current) {
                chunks.push(chunk);
            }
            recording = false;
        }

        if !is_header_junk(line) && foreign_line.is_none() {
            foreign_line = Some(line.to_string());
        }
    }

    if let Some(chunk) = flush(&mut current) {
        chunks.push(chunk);
    }
    ChunkScan {
        chunks,
        foreign_line,
    }
}

/// Lines diff tools emit between file patches that carry no hunk content.
fn is_header_junk(line: &str) -> bool {
    const JUNK_PREFIXES: &[&str] = &[
        "diff ",
        "index ",
        "Index:",
        "====",
        "new file mode",
        "deleted file mode",
        "old mode",
        "new mode",
        "similarity index",
        "rename from",
        "rename to",
        "copy from",
        "copy to",
        "Binary files",
    ];
    line.trim().is_empty() || JUNK_PREFIXES.iter().any(|p| line.starts_with(p))
}

fn flush(current: &mut Vec<&str>) -> Option<String> {
    if current.is_empty() {
        return None;
    }
    let mut chunk = current.join("\n");
    chunk.push('\n');
    current.clear();
    Some(chunk)
}

/// Extract (old line count, new line count) from `@@ -l,s +l,s @@`.
fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let rest = line.strip_prefix("@@ -")?;
    let (old_part, rest) = rest.split_once(" +")?;
    let (new_part, _) = rest.split_once(" @@")?;
    Some((range_len(old_part)?, range_len(new_part)?))
}

fn range_len(part: &str) -> Option<usize> {
    match part.split_once(',') {
        Some((_, len)) => len.trim().parse().ok(),
        // "@@ -3 +4 @@" style means a single line
        None => Some(1),
    }
}
