//! `paste`, `load`, and `apply`: run the input dispatcher on pasted text

use std::fs;
use std::path::Path;

use arboard::Clipboard;
use colored::Colorize;
use treeport_fs::io;
use treeport_patch::{Applied, apply_input};

use crate::error::{CliError, Result};

pub fn run_paste(destination: &Path) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    let text = clipboard.get_text()?;
    if text.trim().is_empty() {
        return Err(CliError::user(
            "Clipboard is empty or does not contain text.",
        ));
    }
    println!("Reading input from clipboard...");
    apply_text(&text, destination)
}

pub fn run_load(input: &Path, destination: &Path) -> Result<()> {
    let text = fs::read_to_string(input)?;
    if text.trim().is_empty() {
        return Err(CliError::user(format!(
            "Input file '{}' is empty.",
            input.display()
        )));
    }
    println!("Reading input from '{}'...", input.display());
    apply_text(&text, destination)
}

fn apply_text(text: &str, destination: &Path) -> Result<()> {
    io::create_folder(destination)?;
    // Resolve "." and friends so the root-name collision check sees the
    // destination's real base name
    let destination = destination.canonicalize()?;
    let destination = destination.as_path();
    match apply_input(text, destination)? {
        Applied::Structure { root } => {
            println!(
                "{} created structure '{}' in '{}'",
                "ok".green().bold(),
                root,
                destination.display()
            );
        }
        Applied::Diff { files } => {
            println!(
                "{} applied unified diff to {files} file(s) in '{}'",
                "ok".green().bold(),
                destination.display()
            );
        }
        Applied::Blocks { count } => {
            println!(
                "{} executed {count} block command(s) in '{}'",
                "ok".green().bold(),
                destination.display()
            );
        }
    }
    Ok(())
}
