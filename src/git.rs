//! Shallow clones of the template collection

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use crate::error::Error;

/// Clone a repository at a specific ref using shallow clone
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
pub fn clone_shallow(url: &str, ref_name: &str, target_dir: &Path) -> Result<(), Error> {
    // git won't clone into an existing non-empty dir
    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }

    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    info!("Cloning {}@{} into {}", url, ref_name, target_dir.display());
    let output = Command::new("git")
        .args(["clone", "--depth=1", "--branch", ref_name, url])
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            r#ref: ref_name.to_string(),
            message: e.to_string(),
            hint: Some("Make sure git is installed and on your PATH".to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitClone {
            url: url.to_string(),
            r#ref: ref_name.to_string(),
            message: stderr.trim().to_string(),
            hint: clone_hint(&stderr),
        });
    }

    Ok(())
}

/// Suggest a fix for common clone failures
fn clone_hint(stderr: &str) -> Option<String> {
    if stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository")
    {
        Some("Check that you have access to the repository and that your git credentials are set up".to_string())
    } else if stderr.contains("Remote branch") && stderr.contains("not found") {
        Some("Check the --ref value; the branch or tag does not exist upstream".to_string())
    } else if stderr.contains("Could not resolve host") {
        Some("Check your network connection, or use --source-dir with a local checkout".to_string())
    } else {
        None
    }
}

/// Convert URL and ref to cache path
pub fn url_to_cache_path(cache_root: &Path, url: &str, ref_name: &str) -> PathBuf {
    // Hash the URL for a filesystem-safe directory name
    let mut hasher = DefaultHasher::new();
    url.hash(&mut hasher);
    let url_hash = format!("{:x}", hasher.finish());

    let safe_ref = ref_name.replace('/', "-");

    cache_root.join(format!("{}-{}", url_hash, safe_ref))
}
