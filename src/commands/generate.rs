//! # Generate Command Implementation
//!
//! This module implements the `generate` subcommand, which selects templates
//! from the collection and writes them to a `.gitignore` file.
//!
//! ## Modes
//!
//! - **Non-interactive**: when `--templates` is given, nothing is asked. Flags
//!   that are not set count as false and the destination defaults to
//!   `.gitignore`.
//! - **Interactive**: otherwise the user is asked whether to include community
//!   and global templates (unless the flags already say so), where to write
//!   (unless `--path` is given), which templates to use, and whether to append
//!   to an existing file.
//!
//! With `--dry-run` the rendered text goes to stdout and no file is touched.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};

use mkignore::defaults::DEFAULT_OUTPUT_FILENAME;
use mkignore::output::{emoji, OutputConfig};
use mkignore::pipeline::{self, generate, load_catalog, Generated};
use mkignore::render::Renderer;
use mkignore::selection::{Catalog, Selector};
use mkignore::settings::Settings;
use mkignore::snapshot::Snapshot;
use mkignore::writer;

use super::SourceArgs;

/// Select templates and write them to a .gitignore file
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Offer templates from the community directory
    #[arg(short = 'c', long)]
    pub include_community: bool,

    /// Offer templates from the Global directory
    #[arg(short = 'g', long)]
    pub include_global: bool,

    /// Append to the destination instead of overwriting it
    #[arg(short, long)]
    pub append: bool,

    /// Output file, or a directory to write `.gitignore` into
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Comma-separated template labels, e.g. "Rust,Vim (global)".
    ///
    /// Giving this flag disables all prompts.
    #[arg(short, long, value_name = "LABELS", value_delimiter = ',')]
    pub templates: Option<Vec<String>>,

    /// Fail when a label matches no template instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Print the generated file instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl GenerateArgs {
    /// Settings as given on the command line, before any prompting
    fn settings(&self) -> Settings {
        Settings {
            include_community: self.include_community,
            include_global: self.include_global,
            templates: self.templates.clone().unwrap_or_default(),
            destination: self
                .path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME)),
            append: self.append,
            strict: self.strict,
        }
    }
}

/// Questions asked in interactive mode
trait Prompter: Selector {
    fn confirm(&self, prompt: &str, default: bool) -> mkignore::error::Result<bool>;
    fn input(&self, prompt: &str, default: &str) -> mkignore::error::Result<String>;
}

/// Prompts on the terminal with `dialoguer`
struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Selector for TerminalPrompter {
    fn choose(&self, offered: &[String]) -> mkignore::error::Result<Vec<String>> {
        // MultiSelect refuses an empty item list
        if offered.is_empty() {
            return Ok(Vec::new());
        }
        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt("Select templates (space to toggle, enter to confirm)")
            .items(offered)
            .interact()
            .map_err(|dialoguer::Error::IO(e)| e)?;
        Ok(chosen.into_iter().map(|i| offered[i].clone()).collect())
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> mkignore::error::Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|dialoguer::Error::IO(e)| e)?;
        Ok(answer)
    }

    fn input(&self, prompt: &str, default: &str) -> mkignore::error::Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|dialoguer::Error::IO(e)| e)?;
        Ok(answer)
    }
}

/// Execute the `generate` command.
pub fn execute(args: GenerateArgs, output: &OutputConfig) -> Result<()> {
    let snapshot = args.source.open_snapshot(args.quiet)?;
    match run(&args, &snapshot, output, &TerminalPrompter::new()) {
        // Ctrl-C at a prompt leaves quietly, like declining to continue
        Err(err) if is_cancelled(&err) => Ok(()),
        result => result,
    }
}

/// Whether `err` is the user interrupting a prompt
fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<mkignore::error::Error>(),
        Some(mkignore::error::Error::Io(e)) if e.kind() == io::ErrorKind::Interrupted
    )
}

fn run<S>(
    args: &GenerateArgs,
    snapshot: &S,
    output: &OutputConfig,
    prompter: &dyn Prompter,
) -> Result<()>
where
    S: Snapshot + ?Sized,
{
    let renderer = Renderer::with_source_url(args.source.source_url.as_str())?;
    let settings = args.settings();

    if args.templates.is_none() {
        return run_interactive(args, snapshot, settings, &renderer, output, prompter);
    }

    if args.dry_run {
        let catalog = load_catalog(snapshot)?;
        let generated = generate(&catalog, &settings, &renderer)?;
        print!("{}", generated.rendered);
        return Ok(());
    }

    let (destination, generated) = pipeline::execute(snapshot, &settings, &renderer)?;
    report(args, output, &destination, &generated);
    Ok(())
}

fn run_interactive<S>(
    args: &GenerateArgs,
    snapshot: &S,
    mut settings: Settings,
    renderer: &Renderer,
    output: &OutputConfig,
    prompter: &dyn Prompter,
) -> Result<()>
where
    S: Snapshot + ?Sized,
{
    let catalog = load_catalog(snapshot)?;

    if !args.include_community {
        settings.include_community = prompter.confirm("Include community templates?", false)?;
    }
    if !args.include_global {
        settings.include_global = prompter.confirm("Include global templates?", false)?;
    }

    if args.dry_run {
        let generated = choose_and_generate(&catalog, &mut settings, renderer, prompter)?;
        print!("{}", generated.rendered);
        return Ok(());
    }

    if args.path.is_none() {
        let answer = prompter.input("Path to .gitignore file", DEFAULT_OUTPUT_FILENAME)?;
        settings.destination = PathBuf::from(answer);
    }
    let destination = writer::resolve_destination(&settings.destination)?;

    let generated = choose_and_generate(&catalog, &mut settings, renderer, prompter)?;

    if !settings.append && destination.exists() {
        settings.append = prompter.confirm(
            &format!("Append to existing {} file?", destination.display()),
            false,
        )?;
    }

    writer::write(&destination, &generated.rendered, settings.write_mode())?;
    report(args, output, &destination, &generated);
    Ok(())
}

fn choose_and_generate(
    catalog: &Catalog,
    settings: &mut Settings,
    renderer: &Renderer,
    prompter: &dyn Prompter,
) -> Result<Generated> {
    let offered = catalog.labels(settings.filter());
    settings.templates = prompter.choose(&offered)?;
    Ok(generate(catalog, settings, renderer)?)
}

fn report(args: &GenerateArgs, output: &OutputConfig, destination: &Path, generated: &Generated) {
    if args.quiet {
        return;
    }
    println!(
        "{} Wrote {} template(s) to {}",
        emoji(output, "✅", "[OK]"),
        generated.selected.len(),
        destination.display()
    );
    if !generated.unmatched.is_empty() {
        println!(
            "{} Skipped: {}",
            emoji(output, "⚠️ ", "[WARN]"),
            generated.unmatched.join(", ")
        );
    }
}
