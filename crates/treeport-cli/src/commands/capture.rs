//! `copy` and `save`: capture a folder into a text artifact

use std::path::Path;

use arboard::Clipboard;
use colored::Colorize;
use treeport_codec::Format;
use treeport_core::read_tree;
use treeport_fs::{Config, io};

use crate::error::Result;

fn capture(folder: &Path, format: Format) -> Result<String> {
    let config = Config::load();
    println!("Reading structure from '{}'...", folder.display());
    let tree = read_tree(folder, &config.ignore_patterns)?;
    Ok(format.serialize(&tree)?)
}

pub fn run_copy(folder: &Path, format: Format) -> Result<()> {
    let text = capture(folder, format)?;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    println!(
        "{} copied structure of '{}' to clipboard ({format} format)",
        "ok".green().bold(),
        folder.display()
    );
    Ok(())
}

pub fn run_save(folder: &Path, output: &Path, format: Format) -> Result<()> {
    let text = capture(folder, format)?;
    io::write_text(output, &text)?;
    println!(
        "{} saved structure to '{}' ({format} format)",
        "ok".green().bold(),
        output.display()
    );
    Ok(())
}
