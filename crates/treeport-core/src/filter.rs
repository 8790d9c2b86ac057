//! Filter engine
//!
//! Decides, per filesystem entry, whether it becomes a node when a tree is
//! built from disk. Two rule sources exist: the global ignore-pattern list
//! (base-name globs from user configuration) and a directory-local rule file
//! that, when present and well-formed, replaces the global patterns for the
//! whole read.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use treeport_fs::PortablePath;

/// Name of the directory-local rule file at the walk root.
pub const RULE_FILE_NAME: &str = ".treeport";

/// Whether a rule file keeps only matches or drops matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Whitelist,
    Blacklist,
}

/// Why a rule file could not be used. Always recovered by falling back to
/// the global ignore patterns, never surfaced to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RuleFileError {
    #[error("rule file unreadable: {0}")]
    Unreadable(std::io::Error),

    #[error("first non-empty line must be `type: whitelist` or `type: blacklist`")]
    InvalidHeader,

    #[error("missing `---` separator line")]
    MissingSeparator,
}

/// One compiled rule-file pattern.
///
/// An absolute pattern matches by exact path equality only; anything else
/// matches as a glob against the entry base name or the root-relative
/// POSIX-style path.
#[derive(Debug)]
struct Pattern {
    absolute: Option<PathBuf>,
    glob: Option<GlobMatcher>,
}

impl Pattern {
    fn compile(raw: &str) -> Self {
        if Path::new(raw).is_absolute() {
            return Self {
                absolute: Some(PathBuf::from(raw)),
                glob: None,
            };
        }
        let normalized = raw.replace('\\', "/");
        let glob = match Glob::new(&normalized) {
            Ok(glob) => Some(glob.compile_matcher()),
            Err(e) => {
                tracing::warn!("skipping invalid rule pattern {raw:?}: {e}");
                None
            }
        };
        Self {
            absolute: None,
            glob,
        }
    }
}

/// A parsed directory-local rule file.
#[derive(Debug)]
pub struct RuleSet {
    pub kind: RuleKind,
    patterns: Vec<Pattern>,
}

impl RuleSet {
    /// Parse a rule file's text.
    ///
    /// Shape: first non-empty line `type: whitelist` or `type: blacklist`,
    /// then a line containing only `---`, then pattern lines. Blank lines
    /// and `#` comments among the patterns are ignored.
    pub fn parse(text: &str) -> Result<Self, RuleFileError> {
        let mut lines = text.lines();

        let header = lines
            .by_ref()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .ok_or(RuleFileError::InvalidHeader)?;
        let kind = match header.strip_prefix("type:").map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "whitelist" => RuleKind::Whitelist,
            Some(v) if v == "blacklist" => RuleKind::Blacklist,
            _ => return Err(RuleFileError::InvalidHeader),
        };

        let mut found_separator = false;
        for line in lines.by_ref() {
            if line.trim() == "---" {
                found_separator = true;
                break;
            }
        }
        if !found_separator {
            return Err(RuleFileError::MissingSeparator);
        }

        let patterns = lines
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(Pattern::compile)
            .collect();

        Ok(Self { kind, patterns })
    }

    /// Load and parse the rule file of a walk root, if one exists.
    ///
    /// `Ok(None)` means no rule file; `Err` means present but unusable.
    pub fn load(root: &Path) -> Result<Option<Self>, RuleFileError> {
        let path = root.join(RULE_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path).map_err(RuleFileError::Unreadable)?;
        Self::parse(&text).map(Some)
    }

    /// True when any pattern matches the entry.
    ///
    /// `abs` is the entry's absolute path, `rel` its path relative to the
    /// walk root, `name` its base name.
    pub fn matches(&self, abs: &Path, rel: &PortablePath, name: &str) -> bool {
        for pattern in &self.patterns {
            if let Some(expected) = &pattern.absolute {
                if paths_equal(expected, abs) {
                    return true;
                }
                continue;
            }
            if let Some(glob) = &pattern.glob {
                if glob.is_match(name) || glob.is_match(rel.as_str()) {
                    return true;
                }
            }
        }
        false
    }
}

fn paths_equal(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}

/// Global-ignore mode: base-name globs only.
#[derive(Debug)]
pub struct NameFilter {
    globs: Vec<GlobMatcher>,
}

impl NameFilter {
    pub fn new(patterns: &[String]) -> Self {
        let globs = patterns
            .iter()
            .filter_map(|raw| match Glob::new(raw) {
                Ok(glob) => Some(glob.compile_matcher()),
                Err(e) => {
                    tracing::warn!("skipping invalid ignore pattern {raw:?}: {e}");
                    None
                }
            })
            .collect();
        Self { globs }
    }

    /// True when the base name matches any ignore pattern.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.globs.iter().any(|g| g.is_match(name))
    }
}
