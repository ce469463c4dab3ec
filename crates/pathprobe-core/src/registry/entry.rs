use serde::{Deserialize, Serialize};

/// File metadata carried alongside a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Human-readable type label, e.g. "Text" or "PDF".
    pub file_type: String,
    /// Size in bytes.
    pub filesize: u64,
}

/// One known file and the directory that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub directory: String,
    /// Unique across a registry.
    pub filepath: String,
    pub filename: String,
    pub stats: FileStats,
}

impl PathEntry {
    pub fn new(directory: &str, filename: &str, file_type: &str, filesize: u64) -> Self {
        Self {
            directory: directory.to_string(),
            filepath: format!("{directory}/{filename}"),
            filename: filename.to_string(),
            stats: FileStats {
                file_type: file_type.to_string(),
                filesize,
            },
        }
    }
}
