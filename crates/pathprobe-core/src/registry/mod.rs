//! Read-only registry of known paths backing the classifier.
//!
//! Built once at startup (from config or the builtin set) and shared behind
//! an `Arc`; nothing mutates it afterwards. Lookups are exact string matches:
//! `/storage/dir1` and `/storage/dir1/` are different keys.

mod entry;

pub use entry::{FileStats, PathEntry};

use std::collections::{HashMap, HashSet};

use crate::error::ProbeError;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<PathEntry>,
    by_filepath: HashMap<String, usize>,
    directories: HashSet<String>,
}

impl Registry {
    /// Builds a registry, rejecting entries that reuse a filepath.
    pub fn from_entries(entries: Vec<PathEntry>) -> Result<Self, ProbeError> {
        let duplicate = {
            let mut seen = HashSet::with_capacity(entries.len());
            entries
                .iter()
                .find(|e| !seen.insert(e.filepath.as_str()))
                .map(|e| e.filepath.clone())
        };
        if let Some(filepath) = duplicate {
            return Err(ProbeError::DuplicateFilepath(filepath));
        }
        Ok(Self::index(entries))
    }

    /// The default storage used when config provides no entries.
    pub fn builtin() -> Self {
        Self::index(builtin_entries())
    }

    /// Caller guarantees filepaths are unique.
    fn index(entries: Vec<PathEntry>) -> Self {
        let by_filepath = entries
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.filepath.clone(), idx))
            .collect();
        let directories = entries.iter().map(|e| e.directory.clone()).collect();
        Self {
            entries,
            by_filepath,
            directories,
        }
    }

    /// Exact lookup by full filepath.
    pub fn file(&self, filepath: &str) -> Option<&PathEntry> {
        self.by_filepath.get(filepath).map(|&idx| &self.entries[idx])
    }

    /// True if any entry lives directly in `directory`.
    pub fn has_directory(&self, directory: &str) -> bool {
        self.directories.contains(directory)
    }

    /// Entries in load order.
    pub fn entries(&self) -> impl Iterator<Item = &PathEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn builtin_entries() -> Vec<PathEntry> {
    vec![
        PathEntry::new("/storage/dir1", "file1.txt", "Text", 1024),
        PathEntry::new("/storage/dir1", "file2.pdf", "PDF", 2048),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_two_files_in_one_directory() {
        let reg = Registry::builtin();
        assert_eq!(reg.len(), 2);
        assert!(reg.has_directory("/storage/dir1"));
        let f = reg.file("/storage/dir1/file2.pdf").expect("file2 exists");
        assert_eq!(f.filename, "file2.pdf");
        assert_eq!(f.stats.file_type, "PDF");
        assert_eq!(f.stats.filesize, 2048);
    }

    #[test]
    fn lookups_are_exact() {
        let reg = Registry::builtin();
        assert!(!reg.has_directory("/storage/dir1/"));
        assert!(!reg.has_directory("/storage"));
        assert!(reg.file("/storage/dir1/FILE1.txt").is_none());
        assert!(reg.file("storage/dir1/file1.txt").is_none());
    }

    #[test]
    fn duplicate_filepath_rejected() {
        let entries = vec![
            PathEntry::new("/a", "x.txt", "Text", 1),
            PathEntry::new("/a", "x.txt", "Text", 2),
        ];
        let err = Registry::from_entries(entries).unwrap_err();
        match err {
            ProbeError::DuplicateFilepath(p) => assert_eq!(p, "/a/x.txt"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_entries_keeps_load_order() {
        let reg = Registry::from_entries(vec![
            PathEntry::new("/b", "two.bin", "Binary", 2),
            PathEntry::new("/a", "one.txt", "Text", 1),
        ])
        .unwrap();
        let names: Vec<_> = reg.entries().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, ["two.bin", "one.txt"]);
        assert!(reg.has_directory("/a"));
        assert!(reg.has_directory("/b"));
    }

    #[test]
    fn empty_registry() {
        let reg = Registry::from_entries(Vec::new()).unwrap();
        assert!(reg.is_empty());
        assert!(!reg.has_directory("/storage/dir1"));
    }
}
