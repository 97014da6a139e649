//! # mkignore CLI
//!
//! This is the binary entry point for the `mkignore` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and colour output.
//! - Executing the appropriate command based on the parsed arguments.
//!
//! The core logic lives in the `mkignore` library crate; the binary only
//! gathers settings, prompts when asked to, and reports results.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
