//! # Fetching the Template Collection
//!
//! This module provides `TemplateSource`, which turns a repository URL and ref
//! into a [`DiskSnapshot`] that discovery can walk. Checkouts are kept in an
//! on-disk cache so repeated runs do not re-clone the collection.
//!
//! ## Design
//!
//! Git access sits behind the **`GitOperations`** trait. The application uses
//! `DefaultGitOperations`, which shells out to the system `git`; tests swap in
//! a mock that records calls and materializes a checkout locally, so the cache
//! logic can be exercised without network access.
//!
//! Only the checkout is cached. Template records are always rebuilt from it
//! by a fresh discovery run.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;
use crate::snapshot::DiskSnapshot;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Shallow-clones `url` at `ref_name` into `target_dir`, replacing it.
    fn clone_shallow(&self, url: &str, ref_name: &str, target_dir: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_shallow(&self, url: &str, ref_name: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone_shallow(url, ref_name, target_dir)
    }
}

/// Fetches template collections into a checkout cache.
pub struct TemplateSource {
    git_ops: Box<dyn GitOperations>,
    cache_root: PathBuf,
}

impl TemplateSource {
    /// Creates a source that clones with the system `git` into `cache_root`.
    pub fn new(cache_root: PathBuf) -> Self {
        Self {
            git_ops: Box::new(DefaultGitOperations),
            cache_root,
        }
    }

    /// Creates a source with a custom `GitOperations` implementation.
    ///
    /// This is primarily used for testing to inject mock operations.
    #[cfg(test)]
    pub fn with_operations(git_ops: Box<dyn GitOperations>, cache_root: PathBuf) -> Self {
        Self {
            git_ops,
            cache_root,
        }
    }

    /// Where the checkout of `url` at `ref_name` lives in the cache
    pub fn checkout_path(&self, url: &str, ref_name: &str) -> PathBuf {
        crate::git::url_to_cache_path(&self.cache_root, url, ref_name)
    }

    /// Checks if a complete checkout is present in the cache.
    ///
    /// A checkout without its `.git` directory is left over from an
    /// interrupted clone and does not count.
    pub fn is_cached(&self, url: &str, ref_name: &str) -> bool {
        is_complete_checkout(&self.checkout_path(url, ref_name))
    }

    /// Fetches the collection, reusing a cached checkout when one exists.
    pub fn fetch(&self, url: &str, ref_name: &str) -> Result<DiskSnapshot> {
        let checkout = self.checkout_path(url, ref_name);
        if is_complete_checkout(&checkout) {
            debug!("Using cached checkout {}", checkout.display());
        } else {
            if checkout.exists() {
                debug!("Discarding incomplete checkout {}", checkout.display());
            }
            self.git_ops.clone_shallow(url, ref_name, &checkout)?;
        }
        Ok(DiskSnapshot::new(checkout))
    }

    /// Fetches the collection, always re-cloning over any cached checkout.
    pub fn fetch_fresh(&self, url: &str, ref_name: &str) -> Result<DiskSnapshot> {
        let checkout = self.checkout_path(url, ref_name);
        info!("Refreshing checkout of {}@{}", url, ref_name);
        self.git_ops.clone_shallow(url, ref_name, &checkout)?;
        Ok(DiskSnapshot::new(checkout))
    }
}

fn is_complete_checkout(checkout: &Path) -> bool {
    checkout.join(".git").is_dir()
}
