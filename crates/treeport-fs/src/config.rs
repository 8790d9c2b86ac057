//! Persisted user configuration
//!
//! A single `config.toml` under the platform config directory holds the
//! global ignore-pattern list. Loading never fails: a missing or malformed
//! file falls back to the compiled-in defaults.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const APP_DIR: &str = "treeport";
const CONFIG_FILENAME: &str = "config.toml";

/// Ignore patterns applied when no directory-local rule file is in effect.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "__pycache__",
    "*.egg-info",
    ".git",
    ".gitignore",
    ".vscode",
    "build",
    "dist",
    "target",
    ".DS_Store",
];

/// User configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base-name globs excluded from every capture.
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,
}

fn default_ignore_patterns() -> Vec<String> {
    DEFAULT_IGNORE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_patterns: default_ignore_patterns(),
        }
    }
}

impl Config {
    /// Path of the config file, creating the directory if needed.
    pub fn path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(Error::NoConfigDir)?;
        let dir = base.join(APP_DIR);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        Ok(dir.join(CONFIG_FILENAME))
    }

    /// Load the user's configuration.
    ///
    /// A missing or unparseable file yields the defaults.
    pub fn load() -> Self {
        let path = match Self::path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("config dir unavailable, using defaults: {e}");
                return Self::default();
            }
        };
        match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("malformed config at {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write this configuration to the config file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| Error::ConfigSerialize {
            message: e.to_string(),
        })?;
        crate::io::write_text(&path, &content)?;
        Ok(path)
    }
}
