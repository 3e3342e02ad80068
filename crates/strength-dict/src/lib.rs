//! Library interface for the `strength-dict` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                        Log filter (e.g., debug, strength_dict_core=trace)
    STRENGTH_DICT_LOG_PATH          Explicit log file path
    STRENGTH_DICT_LOG_DIR           Log directory
    STRENGTH_DICT_DICTIONARY_DIR    Directory of replacement asset files
    STRENGTH_DICT_REQUIRE_ALL       Require all six assets in the dictionary directory
";

/// Command-line interface definition for strength-dict.
#[derive(Parser)]
#[command(name = "strength-dict")]
#[command(about = "Inspect the bundled password-strength dictionaries", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Read asset files from DIR instead of the embedded copies
    #[arg(long, global = true, value_name = "DIR")]
    pub dict_dir: Option<PathBuf>,

    /// Fail unless the dictionary directory holds all six assets
    #[arg(long, global = true)]
    pub require_all: bool,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// List the six assets with their entry counts
    List(commands::list::ListArgs),

    /// Print one asset
    Show(commands::show::ShowArgs),

    /// Print the whole namespace as JSON
    Dump(commands::dump::DumpArgs),

    /// Load every asset and report failures
    Check(commands::check::CheckArgs),

    /// Look a password up in the word lists and patterns
    Lookup(commands::lookup::LookupArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
