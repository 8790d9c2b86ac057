//! treeport CLI
//!
//! Capture a directory tree into a portable text artifact, and reconstruct
//! or mutate a tree from pasted or loaded text.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, ConfigAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Copy { folder, format } => commands::run_copy(&folder, format.into()),
        Commands::Save {
            folder,
            output,
            format,
        } => commands::run_save(&folder, &output, format.into()),
        Commands::Paste { destination } => commands::run_paste(&destination),
        Commands::Load { input, destination } => commands::run_load(&input, &destination),
        Commands::Apply { input, destination } => commands::run_load(&input, &destination),
        Commands::Config(ConfigAction::Path) => commands::run_config_path(),
        Commands::Config(ConfigAction::Init { force }) => commands::run_config_init(force),
    }
}
