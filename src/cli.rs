//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use mkignore::output::OutputConfig;

use crate::commands;

/// mkignore - Generate .gitignore files from the github/gitignore templates
#[derive(Parser, Debug)]
#[command(name = "mkignore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Select templates and write them to a .gitignore file
    Generate(commands::generate::GenerateArgs),

    /// List the templates available for selection
    List(commands::list::ListArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        output.apply();

        match self.command {
            Commands::Generate(args) => commands::generate::execute(args, &output),
            Commands::List(args) => commands::list::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Initialize `env_logger`, letting `RUST_LOG` take precedence over `--log-level`.
fn init_logging(log_level: &str) {
    let mut builder = env_logger::Builder::new();
    match std::env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.parse_filters(log_level),
    };
    // A second initialization (e.g. in tests) is harmless
    let _ = builder.format_timestamp(None).try_init();
}
