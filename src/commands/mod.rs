//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `mkignore`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic, calling into the `mkignore` library.
//!
//! Commands that read templates share [`SourceArgs`], which decides where the
//! template collection comes from.

pub mod completions;
pub mod generate;
pub mod list;

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use mkignore::defaults::{default_cache_root, DEFAULT_REF, DEFAULT_SOURCE_URL};
use mkignore::error::Result;
use mkignore::snapshot::DiskSnapshot;
use mkignore::source::TemplateSource;

/// Where to read templates from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Git URL of the template collection.
    #[arg(
        long,
        value_name = "URL",
        env = "MKIGNORE_SOURCE_URL",
        default_value = DEFAULT_SOURCE_URL
    )]
    pub source_url: String,

    /// Branch or tag of the template collection to fetch.
    #[arg(
        long = "ref",
        value_name = "REF",
        env = "MKIGNORE_REF",
        default_value = DEFAULT_REF
    )]
    pub git_ref: String,

    /// Read templates from a local directory instead of cloning.
    ///
    /// Takes precedence over `--source-url`, which then only names the
    /// collection in the generated header.
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// The root directory for the checkout cache.
    ///
    /// Defaults to the system cache directory (`~/.cache/mkignore` on Linux,
    /// `~/Library/Caches/mkignore` on macOS).
    #[arg(long, value_name = "DIR", env = "MKIGNORE_CACHE")]
    pub cache_root: Option<PathBuf>,

    /// Bypass the cache and fetch a fresh clone
    #[arg(long)]
    pub no_cache: bool,
}

impl SourceArgs {
    /// Open the template collection as a snapshot, cloning it if needed.
    ///
    /// A spinner is shown on stderr while cloning unless `quiet` is set.
    pub fn open_snapshot(&self, quiet: bool) -> Result<DiskSnapshot> {
        if let Some(dir) = &self.source_dir {
            return Ok(DiskSnapshot::new(dir.clone()));
        }

        let cache_root = self.cache_root.clone().unwrap_or_else(default_cache_root);
        let source = TemplateSource::new(cache_root);
        let cached = !self.no_cache && source.is_cached(&self.source_url, &self.git_ref);

        let spinner = if quiet || cached {
            None
        } else {
            Some(fetch_spinner(&self.source_url))
        };

        let result = if self.no_cache {
            source.fetch_fresh(&self.source_url, &self.git_ref)
        } else {
            source.fetch(&self.source_url, &self.git_ref)
        };

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        result
    }
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching templates from {}", url));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
