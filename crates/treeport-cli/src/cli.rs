//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use treeport_codec::Format;

/// treeport - Convert folder structures to portable text and back
#[derive(Parser, Debug)]
#[command(name = "treeport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Artifact format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    /// Strict structured format
    V1,
    /// Hybrid text format; more readable
    #[default]
    V2,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::V1 => Format::V1,
            FormatArg::V2 => Format::V2,
        }
    }
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serialize a folder structure to the clipboard
    Copy {
        /// Folder to capture
        folder: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::V2)]
        format: FormatArg,
    },

    /// Save a folder structure to a text file
    Save {
        /// Folder to capture
        folder: PathBuf,

        /// File to write the artifact to
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::V2)]
        format: FormatArg,
    },

    /// Create or mutate a folder structure from clipboard text
    Paste {
        /// Directory to write into (created if absent)
        #[arg(default_value = ".")]
        destination: PathBuf,
    },

    /// Create or mutate a folder structure from a text file
    Load {
        /// Artifact or patch file to read
        input: PathBuf,

        /// Directory to write into (created if absent)
        #[arg(default_value = ".")]
        destination: PathBuf,
    },

    /// Apply a saved patch artifact to a directory
    Apply {
        /// Patch file to read
        input: PathBuf,

        /// Directory to apply against
        #[arg(default_value = ".")]
        destination: PathBuf,
    },

    /// Manage the treeport configuration
    #[command(subcommand)]
    Config(ConfigAction),
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the path of the configuration file
    Path,

    /// Create a default configuration file for you to edit
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
