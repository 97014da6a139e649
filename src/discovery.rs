//! Discovery of ignore templates in a snapshot
//!
//! The walker visits every directory reachable from a starting path, depth
//! first, in the order the snapshot lists entries. Files whose extension is
//! exactly `.gitignore` become [`TemplateRecord`]s; everything else is
//! skipped without error.
//!
//! ## Failure policy
//!
//! The walk is all-or-nothing. If the starting directory cannot be listed the
//! snapshot is reported as unavailable; if any nested listing or template read
//! fails, the walk stops with [`Error::DiscoveryIo`] naming the path, and the
//! records collected so far are dropped.
//!
//! ## Symlinks
//!
//! Entries reported as [`EntryKind::Symlink`] are skipped, whether they point
//! at a file or a directory. This keeps the walk free of cycles.

use log::debug;

use crate::error::{Error, Result};
use crate::record::{template_name, TemplateRecord};
use crate::snapshot::{join, normalize, DirEntry, EntryKind, Snapshot};

/// Discover every ignore template reachable from `root`.
///
/// Record paths are absolute within the snapshot (`/community/Go.gitignore`).
/// Template content is decoded as UTF-8, replacing invalid sequences.
pub fn discover<S>(snapshot: &S, root: &str) -> Result<Vec<TemplateRecord>>
where
    S: Snapshot + ?Sized,
{
    let root = normalize(root);
    let entries = snapshot
        .list_dir(&root)
        .map_err(|e| Error::SnapshotUnavailable {
            path: root.clone(),
            message: e.to_string(),
        })?;

    let mut records = Vec::new();
    visit_entries(snapshot, &root, entries, &mut records)?;

    debug!("Discovered {} templates under {}", records.len(), root);
    Ok(records)
}

fn visit_dir<S>(snapshot: &S, dir: &str, records: &mut Vec<TemplateRecord>) -> Result<()>
where
    S: Snapshot + ?Sized,
{
    let entries = snapshot.list_dir(dir).map_err(|e| Error::DiscoveryIo {
        path: dir.to_string(),
        message: e.to_string(),
    })?;
    visit_entries(snapshot, dir, entries, records)
}

fn visit_entries<S>(
    snapshot: &S,
    dir: &str,
    entries: Vec<DirEntry>,
    records: &mut Vec<TemplateRecord>,
) -> Result<()>
where
    S: Snapshot + ?Sized,
{
    for entry in entries {
        let path = join(dir, &entry.name);
        match entry.kind {
            EntryKind::Directory => visit_dir(snapshot, &path, records)?,
            EntryKind::Symlink => debug!("Skipping symlink {}", path),
            EntryKind::File => {
                let Some(name) = template_name(&entry.name) else {
                    continue;
                };

                let bytes = snapshot.read_file(&path).map_err(|e| Error::DiscoveryIo {
                    path: path.clone(),
                    message: e.to_string(),
                })?;

                records.push(TemplateRecord {
                    name: name.to_string(),
                    content: String::from_utf8_lossy(&bytes).into_owned(),
                    path,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MemorySnapshot;
    use std::collections::HashSet;
    use std::io;

    /// Wraps a snapshot and fails chosen operations
    struct FailingSnapshot {
        inner: MemorySnapshot,
        fail_list: HashSet<String>,
        fail_read: HashSet<String>,
    }

    impl FailingSnapshot {
        fn new(inner: MemorySnapshot) -> Self {
            Self {
                inner,
                fail_list: HashSet::new(),
                fail_read: HashSet::new(),
            }
        }

        fn fail_listing(mut self, path: &str) -> Self {
            self.fail_list.insert(path.to_string());
            self
        }

        fn fail_reading(mut self, path: &str) -> Self {
            self.fail_read.insert(path.to_string());
            self
        }
    }

    impl Snapshot for FailingSnapshot {
        fn list_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
            if self.fail_list.contains(path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.inner.list_dir(path)
        }

        fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
            if self.fail_read.contains(path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.inner.read_file(path)
        }
    }

    /// Lists a fixed set of entries, including symlinks
    struct LinkedSnapshot;

    impl Snapshot for LinkedSnapshot {
        fn list_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
            match path {
                "/" => Ok(vec![
                    DirEntry::new("Go.gitignore", EntryKind::File),
                    DirEntry::new("Golang.gitignore", EntryKind::Symlink),
                    DirEntry::new("loop", EntryKind::Symlink),
                ]),
                _ => Err(io::Error::new(io::ErrorKind::NotFound, path.to_string())),
            }
        }

        fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
            match path {
                "/Go.gitignore" => Ok(b"*.exe\n".to_vec()),
                _ => Err(io::Error::new(io::ErrorKind::NotFound, path.to_string())),
            }
        }
    }

    fn sample_snapshot() -> MemorySnapshot {
        MemorySnapshot::new()
            .with_file("/Node.gitignore", "node_modules/\n")
            .with_file("/README.md", "# gitignore\n")
            .with_file("/LICENSE", "CC0\n")
            .with_file("/community/Go.gitignore", "*.exe\n")
            .with_file("/community/DotNet/Umbraco.gitignore", "umbraco/\n")
            .with_file("/Global/Vim.gitignore", "*.swp\n")
            .with_file("/Global/notes.txt", "not a template")
    }

    fn paths(records: &[TemplateRecord]) -> Vec<&str> {
        records.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_discover_finds_templates_at_every_depth() {
        let records = discover(&sample_snapshot(), "/").unwrap();
        assert_eq!(
            paths(&records),
            vec![
                "/Global/Vim.gitignore",
                "/Node.gitignore",
                "/community/DotNet/Umbraco.gitignore",
                "/community/Go.gitignore",
            ]
        );
    }

    #[test]
    fn test_discover_sets_name_and_content() {
        let records = discover(&sample_snapshot(), "/").unwrap();
        let umbraco = records.iter().find(|r| r.name == "Umbraco").unwrap();
        assert_eq!(umbraco.path, "/community/DotNet/Umbraco.gitignore");
        assert_eq!(umbraco.content, "umbraco/\n");
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let records = discover(&sample_snapshot(), "/community").unwrap();
        assert_eq!(
            paths(&records),
            vec!["/community/DotNet/Umbraco.gitignore", "/community/Go.gitignore"]
        );
    }

    #[test]
    fn test_discover_empty_snapshot() {
        let records = discover(&MemorySnapshot::new(), "/").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_discover_skips_empty_directories() {
        let mut snapshot = MemorySnapshot::new().with_file("/A.gitignore", "a\n");
        snapshot.add_dir("/empty/deeper");
        let records = discover(&snapshot, "/").unwrap();
        assert_eq!(paths(&records), vec!["/A.gitignore"]);
    }

    #[test]
    fn test_discover_skips_repository_dotfile() {
        let snapshot = MemorySnapshot::new()
            .with_file("/.gitignore", "target/\n")
            .with_file("/Rust.gitignore", "target/\n");
        let records = discover(&snapshot, "/").unwrap();
        assert_eq!(paths(&records), vec!["/Rust.gitignore"]);
    }

    #[test]
    fn test_discover_decodes_invalid_utf8_lossily() {
        let mut snapshot = MemorySnapshot::new();
        snapshot.add_file("/Bin.gitignore", vec![b'a', 0xff, b'\n']);
        let records = discover(&snapshot, "/").unwrap();
        assert_eq!(records[0].content, "a\u{fffd}\n");
    }

    #[test]
    fn test_discover_missing_root_is_unavailable() {
        let err = discover(&MemorySnapshot::new(), "/nope").unwrap_err();
        match err {
            Error::SnapshotUnavailable { path, .. } => assert_eq!(path, "/nope"),
            other => panic!("Expected SnapshotUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_failing_subdirectory_aborts_walk() {
        let snapshot = FailingSnapshot::new(sample_snapshot()).fail_listing("/community/DotNet");
        let err = discover(&snapshot, "/").unwrap_err();
        match err {
            Error::DiscoveryIo { path, message } => {
                assert_eq!(path, "/community/DotNet");
                assert!(message.contains("denied"));
            }
            other => panic!("Expected DiscoveryIo, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_failing_read_aborts_walk() {
        let snapshot = FailingSnapshot::new(sample_snapshot()).fail_reading("/Node.gitignore");
        let err = discover(&snapshot, "/").unwrap_err();
        assert!(err.to_string().contains("/Node.gitignore"));
    }

    #[test]
    fn test_discover_does_not_read_other_files() {
        // Reading README.md would fail, but it is never opened.
        let snapshot = FailingSnapshot::new(sample_snapshot()).fail_reading("/README.md");
        assert_eq!(discover(&snapshot, "/").unwrap().len(), 4);
    }

    #[test]
    fn test_discover_skips_symlinks() {
        let records = discover(&LinkedSnapshot, "/").unwrap();
        assert_eq!(paths(&records), vec!["/Go.gitignore"]);
    }

    #[test]
    fn test_discover_through_trait_object() {
        let snapshot: Box<dyn Snapshot> = Box::new(sample_snapshot());
        assert_eq!(discover(snapshot.as_ref(), "/").unwrap().len(), 4);
    }
}
