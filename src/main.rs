//! pwaforge - base path and installable-app manifest resolution for single-page apps.

mod cli;
mod config;
mod generator;
mod logger;
mod resolve;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::PwaConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = PwaConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::init_project(&config, *dry),
        Commands::Resolve { pretty, .. } => cli::resolve::print_resolved(&config, *pretty),
        Commands::Build { .. } => cli::build::build_all(&config).map(|_| ()),
        Commands::Check { .. } => cli::check::check_config(&config),
    }
}
