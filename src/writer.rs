//! Writing rendered output to its destination
//!
//! This is the last step of a run and the only one that touches the host
//! filesystem for writing. Everything that can fail earlier (fetching,
//! discovery, selection, rendering) has already happened by the time
//! [`write`] is called, so a failed run leaves an existing file untouched.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::defaults::DEFAULT_OUTPUT_FILENAME;
use crate::error::{Error, Result};

/// How rendered output meets existing destination content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the destination
    #[default]
    Overwrite,
    /// Add after existing content
    Append,
}

fn destination_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Destination {
        path: path.display().to_string(),
        message: message.into(),
    }
}

/// Resolve the file a run should write to.
///
/// A path naming an existing directory gets `.gitignore` appended. The parent
/// directory of the result must already exist; it is never created.
pub fn resolve_destination(path: &Path) -> Result<PathBuf> {
    let resolved = match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => path.join(DEFAULT_OUTPUT_FILENAME),
        Ok(_) => path.to_path_buf(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(destination_error(path, e.to_string())),
    };

    if let Some(parent) = resolved.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(destination_error(
                &resolved,
                format!("directory {} does not exist", parent.display()),
            ));
        }
    }

    Ok(resolved)
}

/// Write `rendered` to `destination`.
///
/// In append mode, a newline is inserted first when the existing content does
/// not end with one, so the header always starts on its own line.
pub fn write(destination: &Path, rendered: &str, mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::Overwrite => {
            fs::write(destination, rendered)
                .map_err(|e| destination_error(destination, e.to_string()))?;
        }
        WriteMode::Append => {
            let needs_newline = match fs::read(destination) {
                Ok(existing) => !existing.is_empty() && !existing.ends_with(b"\n"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => return Err(destination_error(destination, e.to_string())),
            };

            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(destination)
                .map_err(|e| destination_error(destination, e.to_string()))?;
            if needs_newline {
                file.write_all(b"\n")
                    .map_err(|e| destination_error(destination, e.to_string()))?;
            }
            file.write_all(rendered.as_bytes())
                .map_err(|e| destination_error(destination, e.to_string()))?;
        }
    }

    info!("Wrote {} bytes to {}", rendered.len(), destination.display());
    Ok(())
}
