//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve the base path and installable-app manifest of a single-page app
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pwa.toml)
    #[arg(short = 'C', long, global = true, default_value = "pwa.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter config file
    #[command(visible_alias = "i")]
    Init {
        /// Project directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Print the resolved base path and manifest as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Write the manifest and service worker register script
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Validate the config and resolve without writing anything
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

/// Shared arguments for Resolve, Build and Check commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Override the base path prefix (e.g. "my-app", or "/" for the root).
    ///
    /// Takes precedence over `--site-url` and over `[deploy]` in the config.
    #[arg(long)]
    pub base: Option<String>,

    /// Override the deployment URL; its path component becomes the base.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// the config. Example for a GitHub Pages project site:
    ///   pwaforge build --site-url "https://user.github.io/my-vue3-webrtc"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Write compact JSON
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }

    /// Build arguments of the current command, if it takes any.
    pub fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Init { .. } => None,
            Commands::Resolve { build_args, .. }
            | Commands::Build { build_args }
            | Commands::Check { build_args } => Some(build_args),
        }
    }
}
