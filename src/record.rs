//! Template records produced by discovery

use serde::{Deserialize, Serialize};

/// Extension that marks a file as an ignore template.
pub const GITIGNORE_EXTENSION: &str = ".gitignore";

/// Path prefix of community-maintained templates.
pub const COMMUNITY_DIR_PREFIX: &str = "/community/";

/// Path prefix of global (editor / OS) templates.
pub const GLOBAL_DIR_PREFIX: &str = "/Global/";

/// One ignore template found in a snapshot.
///
/// `path` always ends with [`GITIGNORE_EXTENSION`] and `name` is the leaf of
/// `path` with that extension stripped once. Records are plain values: they
/// are rebuilt on every discovery run and never mutated afterwards.
///
/// The serialized form (`{name, path, content}`) is used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub name: String,
    pub path: String,
    pub content: String,
}

impl TemplateRecord {
    /// Build a record for the file at `path`.
    ///
    /// Returns `None` when the leaf's extension is not exactly
    /// [`GITIGNORE_EXTENSION`], or when nothing is left once it is stripped
    /// (a repository's own `.gitignore` is not a template).
    pub fn from_path(path: &str, content: impl Into<String>) -> Option<Self> {
        let leaf = path.rsplit('/').next().unwrap_or(path);
        let name = template_name(leaf)?;
        Some(Self {
            name: name.to_string(),
            path: path.to_string(),
            content: content.into(),
        })
    }
}

/// The extension of a leaf name: everything from its last `.` on.
pub fn extension(leaf: &str) -> Option<&str> {
    leaf.rfind('.').map(|idx| &leaf[idx..])
}

/// Derive the template name from a leaf file name.
///
/// ```
/// use mkignore::record::template_name;
///
/// assert_eq!(template_name("Go.gitignore"), Some("Go"));
/// assert_eq!(template_name("Go.gitignore.bak"), None);
/// assert_eq!(template_name(".gitignore"), None);
/// ```
pub fn template_name(leaf: &str) -> Option<&str> {
    if extension(leaf) != Some(GITIGNORE_EXTENSION) {
        return None;
    }
    let name = &leaf[..leaf.len() - GITIGNORE_EXTENSION.len()];
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
