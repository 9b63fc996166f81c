//! mathdemo — tiny arithmetic demo CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use mathdemo::config::Config;
use mathdemo::constants;
use mathdemo::env::Env;
use mathdemo::output;
use mathdemo::text::Lorem;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, RunArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Version) => run_version(),
        None => run_report(cli.run),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Print the demo report: greeting, worked arithmetic, one paragraph.
fn run_report(args: RunArgs) -> Result<()> {
    let base_dir = std::fs::canonicalize(&args.path)
        .with_context(|| format!("--path directory not found: {}", args.path.display()))?;

    let config = Config::load(Some(&base_dir), &Env::system())
        .context("failed to load configuration")?;

    // CLI flag beats env and file layers
    let words = args.words.unwrap_or(config.text.words);
    let provider = Lorem::new(words);

    print!("{}", output::render(&provider));
    Ok(())
}
