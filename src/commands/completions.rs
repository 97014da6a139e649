//! # Completions Command Implementation
//!
//! Prints a shell completion script for `mkignore` on stdout, generated from
//! the `clap` definition with `clap_complete`.
//!
//! ```bash
//! mkignore completions bash > ~/.local/share/bash-completion/completions/mkignore
//! mkignore completions zsh > ~/.zfunc/_mkignore
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for (bash, zsh, fish, powershell, elvish)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout());
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "mkignore", out);
}
