//! Read-only file tree snapshots of a template collection
//!
//! Discovery never touches a concrete filesystem directly. It walks anything
//! implementing [`Snapshot`], which only has to list a directory and read a
//! file. Two providers ship with the crate:
//!
//! - [`MemorySnapshot`]: an in-memory tree, used by tests and benchmarks.
//! - [`DiskSnapshot`]: a checkout on the host filesystem, produced by
//!   [`crate::source::TemplateSource`] or pointed at with `--source-dir`.
//!
//! Snapshot paths are absolute and slash-separated (`/community/Go.gitignore`),
//! independent of the host platform.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The root path of every snapshot.
pub const ROOT: &str = "/";

/// The kind of a directory entry as reported by a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// A symbolic link. Discovery does not follow these.
    Symlink,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Leaf name, without any separators
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Capability to read a hierarchical file tree.
///
/// Implementations must not mutate the tree between calls made by a single
/// discovery run.
pub trait Snapshot {
    /// List the entries directly inside `path`.
    fn list_dir(&self, path: &str) -> io::Result<Vec<DirEntry>>;

    /// Read the full contents of the file at `path`.
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// Normalize a snapshot path to its absolute form.
///
/// Empty segments are dropped, so `""`, `"/"` and `"//"` all become `"/"`,
/// and `"community/"` becomes `"/community"`.
pub fn normalize(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Join a directory path and a leaf name.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path),
    )
}

/// In-memory snapshot for fast, hermetic discovery
///
/// Directories are implied by the files beneath them; empty directories can
/// be added explicitly with [`MemorySnapshot::add_dir`]. Listings come back
/// sorted by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
    /// Files stored as absolute path -> content mapping
    files: BTreeMap<String, Vec<u8>>,
    /// Directories added without any files
    dirs: BTreeSet<String>,
}

impl MemorySnapshot {
    /// Create a new empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn add_file(&mut self, path: &str, content: impl Into<Vec<u8>>) {
        self.files.insert(normalize(path), content.into());
    }

    /// Add a file with string content
    pub fn add_file_string(&mut self, path: &str, content: &str) {
        self.add_file(path, content.as_bytes().to_vec());
    }

    /// Builder form of [`MemorySnapshot::add_file_string`]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.add_file_string(path, content);
        self
    }

    /// Add an empty directory
    pub fn add_dir(&mut self, path: &str) {
        self.dirs.insert(normalize(path));
    }

    /// Check if a file exists
    pub fn exists(&self, path: &str) -> bool {
        self.files.contains_key(&normalize(path))
    }

    /// Get the number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the snapshot holds no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn is_dir(&self, path: &str) -> bool {
        if path == ROOT || self.dirs.contains(path) {
            return true;
        }
        let prefix = format!("{}/", path);
        self.files
            .keys()
            .chain(self.dirs.iter())
            .any(|p| p.starts_with(&prefix))
    }
}

impl Snapshot for MemorySnapshot {
    fn list_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let path = normalize(path);
        if self.files.contains_key(&path) {
            return Err(io::Error::other(format!("not a directory: {}", path)));
        }
        if !self.is_dir(&path) {
            return Err(not_found(&path));
        }

        let prefix = if path == ROOT {
            path.clone()
        } else {
            format!("{}/", path)
        };

        let mut children: BTreeMap<String, EntryKind> = BTreeMap::new();
        let file_paths = self.files.keys().map(|p| (p, EntryKind::File));
        let dir_paths = self.dirs.iter().map(|p| (p, EntryKind::Directory));
        for (full, leaf_kind) in file_paths.chain(dir_paths) {
            let Some(rest) = full.strip_prefix(&prefix) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            match rest.split_once('/') {
                Some((dir, _)) => {
                    children.insert(dir.to_string(), EntryKind::Directory);
                }
                None => {
                    children.entry(rest.to_string()).or_insert(leaf_kind);
                }
            }
        }

        Ok(children
            .into_iter()
            .map(|(name, kind)| DirEntry { name, kind })
            .collect())
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        let path = normalize(path);
        self.files
            .get(&path)
            .cloned()
            .ok_or_else(|| not_found(&path))
    }
}

/// Snapshot backed by a directory on the host filesystem
///
/// The `.git` directory is never listed. Symlinks are reported as
/// [`EntryKind::Symlink`] rather than resolved. Listings are sorted by name so
/// discovery order does not depend on the host's `readdir` order.
#[derive(Debug, Clone)]
pub struct DiskSnapshot {
    root: PathBuf,
}

impl DiskSnapshot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The host directory this snapshot is rooted at
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let mut resolved = self.root.clone();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            resolved.push(segment);
        }
        resolved
    }
}

impl Snapshot for DiskSnapshot {
    fn list_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == ".git" {
                continue;
            }
            let file_type = entry.file_type()?;
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(DirEntry { name, kind });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path))
    }
}
