// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI runs. Subcommands manage the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

/// menucard - record a restaurant menu and see per-course averages
#[derive(Parser, Debug)]
#[command(name = "menucard")]
#[command(version = VERSION)]
#[command(about = "Record a restaurant menu in the terminal", long_about = None)]
pub struct Cli {
    /// Start with a few sample dishes on the menu
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run a subcommand if one was given. Returns true if the caller should exit.
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset()?;
            } else {
                println!("Usage: menucard config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
