//! # mkignore Library
//!
//! This library builds `.gitignore` files from a collection of templates laid
//! out like <https://github.com/github/gitignore>. It is used by the `mkignore`
//! command-line tool, but the pipeline works on any [`snapshot::Snapshot`], so
//! other front ends can drive it with their own template trees.
//!
//! ## Quick Example
//!
//! ```
//! use mkignore::pipeline::{generate, load_catalog};
//! use mkignore::render::Renderer;
//! use mkignore::settings::Settings;
//! use mkignore::snapshot::MemorySnapshot;
//!
//! let snapshot = MemorySnapshot::new()
//!     .with_file("/Rust.gitignore", "target/\n")
//!     .with_file("/community/Go.gitignore", "*.exe\n");
//!
//! let catalog = load_catalog(&snapshot).unwrap();
//! let settings = Settings {
//!     templates: vec!["Rust".to_string()],
//!     ..Settings::default()
//! };
//!
//! let generated = generate(&catalog, &settings, &Renderer::new().unwrap()).unwrap();
//! assert!(generated.rendered.contains("# Template: Rust\ntarget/\n"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Snapshots (`snapshot`)**: Read-only views of a template tree, either in
//!   memory or rooted at a directory on disk.
//! - **Records (`record`, `classify`)**: One record per `*.gitignore` file,
//!   labelled by its stem and by whether it lives under `/community/` or
//!   `/Global/`.
//! - **Discovery (`discovery`)**: A depth-first walk that turns a snapshot into
//!   records.
//! - **Selection (`selection`)**: Category filtering and resolution of the
//!   labels a user asked for.
//! - **Rendering and writing (`render`, `writer`)**: Assembly of the final
//!   document and its placement on disk.
//! - **Fetching (`source`, `git`)**: Shallow clones of the upstream collection,
//!   cached between runs.
//!
//! The [`pipeline`] module ties these together.

pub mod classify;
pub mod defaults;
pub mod discovery;
pub mod error;
pub mod git;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod selection;
pub mod settings;
pub mod snapshot;
pub mod source;
pub mod writer;

#[cfg(test)]
mod record_proptest;
