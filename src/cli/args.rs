//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Tiny arithmetic demo CLI.
#[derive(Parser, Debug)]
#[command(
    name = "mathdemo",
    version = mathdemo::constants::VERSION,
    about = "Prints a greeting, a worked arithmetic example, and a paragraph of filler text",
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands. Without one, the demo report is printed.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print version information.
    Version,
}

/// Arguments for the default report run.
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Directory whose local config file applies (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Number of words in the printed paragraph (overrides config).
    #[arg(long)]
    pub words: Option<usize>,
}
