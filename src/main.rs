//! favtrim - turn one source image into transparent favicons and a rounded Apple touch icon.

mod cli;
mod config;
mod image;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let result = match &cli.command {
        Commands::Generate { args } => cli::generate::generate_icons(&cli, args),
        Commands::Init { dry } => {
            let path = std::env::current_dir()?.join(&cli.config);
            cli::init::init_config(&path, *dry)
        }
    };

    if let Err(e) = &result {
        logger::status_error("failed", &format!("{e:#}"));
        std::process::exit(1);
    }
    Ok(())
}
