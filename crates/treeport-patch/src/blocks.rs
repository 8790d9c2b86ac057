//! Block-command parsing
//!
//! Pasted input may carry repeated `>>> file:` / `>>> patch:` / `>>> diff:`
//! blocks, each closed by a `<<<` line. This module scans them out and
//! builds patch descriptors from their bodies.

use crate::descriptor::Patch;
use crate::{Error, Result};

const FILE_PREFIX: &str = ">>> file: ";
const PATCH_PREFIX: &str = ">>> patch: ";
const DIFF_PREFIX: &str = ">>> diff: ";
const BLOCK_END: &str = "<<<";
const META_SEPARATOR: &str = "---";

/// What a block instructs the dispatcher to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    File,
    Patch,
    Diff,
}

/// One scanned block: command kind, target path, raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub path: String,
    pub body: String,
}

/// Scan input for command blocks, in input order.
///
/// A block left open at end of input is closed there.
pub fn scan_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<(BlockKind, String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some((kind, path, buffer)) = current.as_mut() {
            if line.trim_end() == BLOCK_END {
                blocks.push(Block {
                    kind: *kind,
                    path: std::mem::take(path),
                    body: assemble_body(buffer),
                });
                current = None;
            } else {
                buffer.push(line);
            }
            continue;
        }

        for (prefix, kind) in [
            (FILE_PREFIX, BlockKind::File),
            (PATCH_PREFIX, BlockKind::Patch),
            (DIFF_PREFIX, BlockKind::Diff),
        ] {
            if let Some(rest) = line.strip_prefix(prefix) {
                current = Some((kind, rest.trim().to_string(), Vec::new()));
                break;
            }
        }
    }

    if let Some((kind, path, buffer)) = current {
        tracing::warn!("block for {path:?} is not closed; treating end of input as close");
        blocks.push(Block {
            kind,
            path,
            body: assemble_body(&buffer),
        });
    }
    blocks
}

fn assemble_body(lines: &[&str]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        let mut body = lines.join("\n");
        body.push('\n');
        body
    }
}

/// Build a [`Patch::ReplaceLines`] from a `>>> patch:` block body.
///
/// The body is a metadata section containing a `lines: <start>-<end>` token,
/// a `---` line, then the replacement content.
pub fn parse_patch_block(path: &str, body: &str) -> Result<Patch> {
    let lines: Vec<&str> = body.lines().collect();
    let separator = lines
        .iter()
        .position(|l| l.trim() == META_SEPARATOR)
        .ok_or_else(|| Error::malformed_block(path, "missing --- separator"))?;

    let range = lines[..separator]
        .iter()
        .find_map(|l| l.trim().strip_prefix("lines:"))
        .ok_or_else(|| Error::malformed_block(path, "missing lines: token"))?;
    let (start, end) = range
        .trim()
        .split_once('-')
        .ok_or_else(|| Error::malformed_block(path, "lines token is not <start>-<end>"))?;
    let start_line: usize = start
        .trim()
        .parse()
        .map_err(|_| Error::malformed_block(path, "start line is not a number"))?;
    let end_line: usize = end
        .trim()
        .parse()
        .map_err(|_| Error::malformed_block(path, "end line is not a number"))?;

    Ok(Patch::ReplaceLines {
        path: path.to_string(),
        start_line,
        end_line,
        new_content: assemble_body(&lines[separator + 1..]),
    })
}

/// Strip one surrounding Markdown code fence, if present.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim_end();
    let mut lines = trimmed.lines();
    let Some(first) = lines.next() else {
        return text.to_string();
    };
    if !first.trim_start().starts_with("```") {
        return text.to_string();
    }
    let inner: Vec<&str> = lines.collect();
    match inner.split_last() {
        Some((last, body)) if last.trim() == "```" => assemble_body(body),
        _ => text.to_string(),
    }
}
