//! `config path` and `config init`

use colored::Colorize;
use treeport_fs::Config;

use crate::error::Result;

pub fn run_config_path() -> Result<()> {
    let path = Config::path()?;
    println!("Your configuration file is located at:");
    println!("{}", path.display().to_string().green());
    Ok(())
}

pub fn run_config_init(force: bool) -> Result<()> {
    let path = Config::path()?;
    if path.exists() && !force {
        println!("{}", "Configuration file already exists.".yellow());
        println!("To overwrite it, run: treeport config init --force");
        println!("To see its location, run: treeport config path");
        return Ok(());
    }

    let path = Config::default().save()?;
    println!("{}", "Default configuration file created at:".green());
    println!("{}", path.display());
    println!("Edit this file to customize the ignored folders and files.");
    Ok(())
}
