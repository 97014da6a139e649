//! Default values for mkignore.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Name of the tool, as credited in generated files.
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// The upstream template collection.
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/github/gitignore";

/// The branch of the upstream collection to fetch.
pub const DEFAULT_REF: &str = "main";

/// File name written when the destination is a directory or not given.
pub const DEFAULT_OUTPUT_FILENAME: &str = ".gitignore";

/// Returns the default cache root directory.
///
/// Uses the platform-appropriate cache directory:
/// - Linux: `~/.cache/mkignore` (XDG Base Directory)
/// - macOS: `~/Library/Caches/mkignore`
/// - Windows: `{FOLDERID_LocalAppData}\mkignore`
///
/// Falls back to `.mkignore-cache` in the current directory if the
/// platform cache directory cannot be determined.
///
/// This can be overridden by the `--cache-root` CLI flag or the
/// `MKIGNORE_CACHE` environment variable.
pub fn default_cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".mkignore-cache"))
        .join(TOOL_NAME)
}
