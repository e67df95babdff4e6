use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tomatui::cli::args::{Cli, Commands};
use tomatui::cli::commands;
use tomatui::config::SettingsStore;
use tomatui::error::TomatuiError;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TomatuiError> {
    let cli = Cli::parse();

    let store = match cli.settings {
        Some(path) => SettingsStore::at(path),
        None => SettingsStore::new()?,
    };

    match cli.command {
        Some(Commands::Stats) => {
            println!("{}", commands::stats(&store, cli.output)?);
        }
        Some(Commands::Completions { shell }) => {
            print!("{}", commands::completions(shell)?);
        }
        None => tomatui::tui::run(store)?,
    }

    Ok(())
}
