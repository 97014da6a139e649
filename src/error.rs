//! # Error Handling
//!
//! This module defines the centralized error type for `mkignore`. It uses the
//! `thiserror` library to describe every failure the library can surface,
//! with enough context (paths, URLs, labels) to explain what went wrong.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all library failures.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Discovery and I/O failures are terminal for the whole operation: there is
//! no partial-success mode, so callers never see a subset of templates because
//! one file in the snapshot could not be read.

use thiserror::Error;

/// Main error type for mkignore operations
#[derive(Error, Debug)]
pub enum Error {
    /// The snapshot could not be enumerated at its root, or was never produced.
    #[error("Template snapshot unavailable at {path}: {message}")]
    SnapshotUnavailable { path: String, message: String },

    /// Listing a directory or reading a matched template failed mid-walk.
    ///
    /// The walk is aborted and any records gathered so far are discarded.
    #[error("Failed to read template snapshot at {path}: {message}")]
    DiscoveryIo { path: String, message: String },

    /// The built-in render template is malformed.
    ///
    /// This is a build-time defect rather than a user-facing condition.
    #[error("Invalid render template: {message}")]
    TemplateDefinition { message: String },

    /// Rendering a well-formed template failed.
    #[error("Render error: {message}")]
    Render { message: String },

    /// One or more requested labels matched no candidate.
    ///
    /// Only raised when selection runs with the strict policy.
    #[error("No template matches: {}", labels.join(", "))]
    SelectionLabelMismatch { labels: Vec<String> },

    /// Cloning the template collection failed.
    ///
    /// Includes the repository URL, ref, error message, and an optional hint
    /// for resolution.
    #[error("Git clone error for {url}@{r#ref}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        r#ref: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// The destination path cannot receive the rendered output.
    #[error("Destination error for {path}: {message}")]
    Destination { path: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
