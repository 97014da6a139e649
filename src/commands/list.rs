//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which prints the labels that
//! `generate` would offer for selection. It is a read-only operation.
//!
//! - **Category filtering**: `-c`/`-g` add community and global templates,
//!   exactly as for `generate`.
//! - **Long format**: `--long` adds the path of each template.
//! - **JSON**: `--json` prints the template records (`name`, `path`,
//!   `content`) for use by other tools.

use anyhow::Result;
use clap::Args;

use mkignore::pipeline::load_catalog;
use mkignore::record::TemplateRecord;
use mkignore::selection::{Candidate, CategoryFilter};

use super::SourceArgs;

/// List the templates available for selection
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Include templates from the community directory
    #[arg(short = 'c', long)]
    pub include_community: bool,

    /// Include templates from the Global directory
    #[arg(short = 'g', long)]
    pub include_global: bool,

    /// Show the path of each template
    #[arg(short, long, conflicts_with = "json")]
    pub long: bool,

    /// Print template records as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs) -> Result<()> {
    let snapshot = args.source.open_snapshot(args.json)?;
    let catalog = load_catalog(&snapshot)?;
    let filter = CategoryFilter::new(args.include_community, args.include_global);
    let candidates = catalog.candidates(filter);

    if args.json {
        println!("{}", to_json(&candidates)?);
        return Ok(());
    }

    if candidates.is_empty() {
        eprintln!("No templates found.");
        return Ok(());
    }

    for line in format_listing(&candidates, args.long) {
        println!("{}", line);
    }
    Ok(())
}

fn format_listing(candidates: &[Candidate<'_>], long: bool) -> Vec<String> {
    if !long {
        return candidates.iter().map(|c| c.label().to_string()).collect();
    }

    let width = candidates
        .iter()
        .map(|c| c.label().chars().count())
        .max()
        .unwrap_or(0);
    candidates
        .iter()
        .map(|c| format!("{:<width$}  {}", c.label(), c.record.path, width = width))
        .collect()
}

fn to_json(candidates: &[Candidate<'_>]) -> serde_json::Result<String> {
    let records: Vec<&TemplateRecord> = candidates.iter().map(|c| c.record).collect();
    serde_json::to_string_pretty(&records)
}
