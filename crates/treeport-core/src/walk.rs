//! Disk walk: directory tree to [`Node`]
//!
//! Enumerates entries lexicographically, applies the filter engine per
//! entry, and reads file content with the binary/error sentinels. The walk
//! is iterative over an explicit frame stack.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use treeport_fs::{PortablePath, io};

use crate::filter::{NameFilter, RULE_FILE_NAME, RuleKind, RuleSet};
use crate::node::Node;
use crate::{Error, Result};

enum Mode {
    Global(NameFilter),
    Rules(RuleSet),
}

enum Decision {
    /// Include; `matched` records whether a whitelist pattern hit the entry
    /// itself (folders kept provisionally carry `matched: false`).
    Include { matched: bool },
    Exclude,
}

struct Frame {
    path: PathBuf,
    name: String,
    matched: bool,
    children: Vec<Node>,
    pending: VecDeque<String>,
}

/// Build a tree from a directory (or a single file) on disk.
///
/// `ignore_patterns` is the injected global pattern list; a well-formed
/// `.treeport` rule file at the root replaces it for this whole read. A
/// malformed rule file falls back to the global patterns.
pub fn read_tree(root: &Path, ignore_patterns: &[String]) -> Result<Node> {
    if !root.exists() {
        return Err(Error::NotFound {
            path: root.to_path_buf(),
        });
    }

    if root.is_file() {
        return Ok(Node::file(base_name(root), io::read_file_content(root)));
    }

    let mode = match RuleSet::load(root) {
        Ok(Some(rules)) => Mode::Rules(rules),
        Ok(None) => Mode::Global(NameFilter::new(ignore_patterns)),
        Err(e) => {
            tracing::warn!(
                "unusable rule file in {}, falling back to global ignore patterns: {e}",
                root.display()
            );
            Mode::Global(NameFilter::new(ignore_patterns))
        }
    };

    let mut stack = vec![Frame {
        path: root.to_path_buf(),
        name: base_name(root),
        matched: true,
        children: Vec::new(),
        pending: io::list_entry_names(root)?.into(),
    }];

    loop {
        let frame = stack
            .last_mut()
            .expect("walk stack is never empty before the root folder returns");

        let Some(entry_name) = frame.pending.pop_front() else {
            // Directory finished: fold the frame into its parent.
            let done = stack.pop().expect("frame was just observed");
            let node = Node::Folder {
                name: done.name,
                children: done.children,
            };
            match stack.last_mut() {
                Some(parent) => {
                    let keep = match &mode {
                        Mode::Rules(rules) if rules.kind == RuleKind::Whitelist => {
                            done.matched || !node.children().is_empty()
                        }
                        _ => true,
                    };
                    if keep {
                        parent.children.push(node);
                    }
                }
                None => return Ok(node),
            }
            continue;
        };

        let entry_path = frame.path.join(&entry_name);
        let rel = relative_to(&entry_path, root);
        let is_dir = entry_path.is_dir();

        // The rule file itself never appears in the tree
        if matches!(mode, Mode::Rules(_)) && rel.as_str() == RULE_FILE_NAME {
            continue;
        }

        match decide(&mode, &entry_path, &rel, &entry_name, is_dir) {
            Decision::Exclude => continue,
            Decision::Include { matched } if is_dir => {
                stack.push(Frame {
                    pending: io::list_entry_names(&entry_path)?.into(),
                    path: entry_path,
                    name: entry_name,
                    matched,
                    children: Vec::new(),
                });
            }
            Decision::Include { .. } => {
                let content = io::read_file_content(&entry_path);
                frame.children.push(Node::file(entry_name, content));
            }
        }
    }
}

fn decide(mode: &Mode, abs: &Path, rel: &PortablePath, name: &str, is_dir: bool) -> Decision {
    match mode {
        Mode::Global(filter) => {
            if filter.is_ignored(name) {
                Decision::Exclude
            } else {
                Decision::Include { matched: false }
            }
        }
        Mode::Rules(rules) => {
            let matched = rules.matches(abs, rel, name);
            match rules.kind {
                RuleKind::Blacklist if matched => Decision::Exclude,
                RuleKind::Blacklist => Decision::Include { matched: false },
                RuleKind::Whitelist if matched => Decision::Include { matched: true },
                // Unmatched folders are walked provisionally; they survive
                // only if a descendant does. Unmatched files are dropped.
                RuleKind::Whitelist if is_dir => Decision::Include { matched: false },
                RuleKind::Whitelist => Decision::Exclude,
            }
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string())
}

fn relative_to(path: &Path, root: &Path) -> PortablePath {
    match path.strip_prefix(root) {
        Ok(rel) => PortablePath::new(rel.to_string_lossy()),
        Err(_) => PortablePath::new(path.to_string_lossy()),
    }
}
