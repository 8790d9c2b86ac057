//! Format V2: hybrid human-editable encoding
//!
//! A header line, a `---` separator, an indented tree listing (orientation
//! only), then one delimited block per file carrying its root-relative
//! POSIX path and raw content. Folders are not emitted; they are inferred
//! from the file paths on the way back in.

use treeport_core::Node;
use treeport_fs::PortablePath;

use crate::{Error, Result};

/// Marker on the first line of a V2 artifact.
pub const V2_MARKER: &str = "treeport-v2";

const SEPARATOR: &str = "---";
const FILE_BLOCK_PREFIX: &str = ">>> file: ";
const BLOCK_END: &str = "<<<";

/// Encode a tree as a V2 artifact.
///
/// File blocks are sorted by path-segment sequence so output is
/// deterministic regardless of construction order.
pub fn serialize(root: &Node) -> String {
    let mut out = String::new();
    out.push_str(V2_MARKER);
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str("tree:\n");
    render_listing(root, &mut out);

    let mut entries = root.file_entries();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, content) in entries {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(FILE_BLOCK_PREFIX);
        out.push_str(path.as_str());
        out.push('\n');
        out.push_str(content);
        if !content.is_empty() && !content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(BLOCK_END);
        out.push('\n');
    }
    out
}

/// Decode a V2 artifact.
///
/// The parser scans line by line rather than splitting on `---`, so file
/// content containing separator-looking lines survives. Only the header
/// marker is mandatory; a blockless artifact degrades to an empty root
/// folder named after the first tree-listing line.
pub fn parse(text: &str) -> Result<Node> {
    let mut lines = text.lines();
    match lines.next() {
        Some(first) if first.trim_end() == V2_MARKER => {}
        _ => {
            return Err(Error::MissingHeader {
                expected: V2_MARKER,
            });
        }
    }

    let mut files: Vec<(PortablePath, String)> = Vec::new();
    let mut block: Option<(String, Vec<&str>)> = None;
    let mut listing_root: Option<String> = None;
    let mut after_tree_tag = false;

    for line in lines {
        if let Some((path, buffer)) = block.as_mut() {
            if line.trim_end() == BLOCK_END {
                let (path, buffer) = (std::mem::take(path), std::mem::take(buffer));
                files.push((PortablePath::new(&path), assemble_content(&buffer)));
                block = None;
            } else {
                buffer.push(line);
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix(FILE_BLOCK_PREFIX) {
            block = Some((rest.trim().to_string(), Vec::new()));
            continue;
        }

        if line.trim_end() == "tree:" {
            after_tree_tag = true;
            continue;
        }
        if after_tree_tag {
            after_tree_tag = false;
            let candidate = line.trim();
            if !candidate.is_empty() && candidate != SEPARATOR && listing_root.is_none() {
                listing_root = Some(candidate.trim_end_matches('/').to_string());
            }
        }
    }

    if let Some((path, _)) = block {
        return Err(Error::UnterminatedBlock { path });
    }

    build_tree(files, listing_root)
}

fn assemble_content(lines: &[&str]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}

/// Indented listing: two spaces per depth, folders suffixed with `/`.
fn render_listing(root: &Node, out: &mut String) {
    let mut stack = vec![(root, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(node.name());
        if node.is_folder() {
            out.push('/');
        }
        out.push('\n');
        if let Node::Folder { children, .. } = node {
            for child in children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }
}

/// Rebuild the folder hierarchy implied by the file paths.
fn build_tree(files: Vec<(PortablePath, String)>, listing_root: Option<String>) -> Result<Node> {
    if files.is_empty() {
        // Degraded path: folder-only captures carry no blocks, so the best
        // we can recover is an empty root named by the listing.
        let name = listing_root.ok_or(Error::EmptyArtifact)?;
        return Ok(Node::folder(name));
    }

    // A lone single-segment path is a capture whose root was a file
    if files.len() == 1 && files[0].0.segment_count() == 1 {
        let (path, content) = files.into_iter().next().ok_or(Error::EmptyArtifact)?;
        let name = path.file_name().ok_or_else(|| Error::ConflictingEntry {
            path: path.to_string(),
        })?;
        return Ok(Node::file(name, content));
    }

    let root_name = files[0]
        .0
        .first_segment()
        .ok_or_else(|| Error::ConflictingEntry {
            path: files[0].0.to_string(),
        })?
        .to_string();

    let mut root_children: Vec<Node> = Vec::new();
    for (path, content) in &files {
        let segments: Vec<&str> = path.segments().collect();
        if segments.first() != Some(&root_name.as_str()) || segments.len() < 2 {
            return Err(Error::NoCommonRoot {
                path: path.to_string(),
            });
        }
        attach_file(&mut root_children, &segments[1..], content.clone(), path)?;
    }

    Ok(Node::Folder {
        name: root_name,
        children: root_children,
    })
}

fn attach_file(
    children: &mut Vec<Node>,
    segments: &[&str],
    content: String,
    full_path: &PortablePath,
) -> Result<()> {
    let mut current = children;
    for segment in &segments[..segments.len() - 1] {
        let index = match current.iter().position(|c| c.name() == *segment) {
            Some(index) => index,
            None => {
                current.push(Node::folder(*segment));
                current.len() - 1
            }
        };
        current = match &mut current[index] {
            Node::Folder { children, .. } => children,
            Node::File { .. } => {
                return Err(Error::ConflictingEntry {
                    path: full_path.to_string(),
                });
            }
        };
    }

    let name = segments[segments.len() - 1];
    if current.iter().any(|c| c.name() == name) {
        return Err(Error::ConflictingEntry {
            path: full_path.to_string(),
        });
    }
    current.push(Node::file(name, content));
    Ok(())
}
