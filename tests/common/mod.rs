//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture holding a small template collection laid
//! out like github/gitignore, plus helpers to run the `mkignore` binary
//! against it without touching the network.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new();
//!     fixture.generate().args(["-t", "Node"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::should_skip_network_tests;
    #[allow(unused_imports)]
    pub use super::templates;
    pub use super::TestFixture;
}

/// Template contents used by the fixture.
#[allow(dead_code)]
pub mod templates {
    pub const NODE: &str = "node_modules/\nnpm-debug.log\n";
    pub const GO: &str = "*.exe\n*.test\n";
    pub const VIM: &str = "*.swp\n*~\n";
    pub const RUST: &str = "/target/\nCargo.lock\n";
}

/// Check if network tests should be skipped.
///
/// Returns `true` if the `SKIP_NETWORK_TESTS` environment variable is set.
#[allow(dead_code)]
pub fn should_skip_network_tests() -> bool {
    env::var("SKIP_NETWORK_TESTS").is_ok()
}

/// A temporary directory with a template collection and a project directory.
///
/// ```text
/// <tmp>/templates/Node.gitignore
/// <tmp>/templates/Rust.gitignore
/// <tmp>/templates/community/Go.gitignore
/// <tmp>/templates/Global/Vim.gitignore
/// <tmp>/templates/README.md
/// <tmp>/project/
/// <tmp>/cache/
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with the standard template collection.
    pub fn new() -> Self {
        let fixture = Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        };
        fixture
            .with_template("Node.gitignore", templates::NODE)
            .with_template("Rust.gitignore", templates::RUST)
            .with_template("community/Go.gitignore", templates::GO)
            .with_template("Global/Vim.gitignore", templates::VIM)
            .with_template("README.md", "# Templates\n")
            .with_project_file(".keep", "")
    }

    /// Add a file to the template collection.
    pub fn with_template(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child("templates")
            .child(path)
            .write_str(content)
            .expect("Failed to write template");
        self
    }

    /// Add a file to the project directory.
    pub fn with_project_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child("project")
            .child(path)
            .write_str(content)
            .expect("Failed to write project file");
        self
    }

    /// Root of the template collection.
    pub fn templates_dir(&self) -> PathBuf {
        self.temp_dir.path().join("templates")
    }

    /// The project directory, used as the working directory of commands.
    pub fn project_dir(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// The default destination in the project directory.
    pub fn gitignore_path(&self) -> PathBuf {
        self.project_dir().join(".gitignore")
    }

    /// Get the path to the temporary directory.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command running in the project directory.
    ///
    /// Environment overrides are cleared and the cache points into the
    /// fixture, so a stray clone never lands in the user's cache.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mkignore");
        cmd.current_dir(self.project_dir())
            .env_remove("MKIGNORE_SOURCE_URL")
            .env_remove("MKIGNORE_REF")
            .env_remove("RUST_LOG")
            .env("MKIGNORE_CACHE", self.temp_dir.path().join("cache"))
            .env("NO_COLOR", "1");
        cmd
    }

    /// `mkignore generate` reading from the fixture's templates.
    pub fn generate(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("generate").arg("--source-dir").arg(self.templates_dir());
        cmd
    }

    /// `mkignore list` reading from the fixture's templates.
    #[allow(dead_code)]
    pub fn list(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("list").arg("--source-dir").arg(self.templates_dir());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_lays_out_templates() {
        let fixture = TestFixture::new();
        assert!(fixture.templates_dir().join("community/Go.gitignore").exists());
        assert!(fixture.templates_dir().join("Global/Vim.gitignore").exists());
        assert!(fixture.project_dir().is_dir());
        assert!(!fixture.gitignore_path().exists());
    }
}
