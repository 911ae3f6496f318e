//! Source file metadata and provenance.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the file a document was loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Declared LAS version literal (the raw `VERS` value, if present).
    pub version: Option<String>,
    /// Number of data rows.
    pub row_count: usize,
    /// Number of data columns.
    pub column_count: usize,
    /// When the load was performed.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file load; counts are filled in after the
    /// table is built.
    pub fn new(path: PathBuf, hash: String, size_bytes: u64) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            version: None,
            row_count: 0,
            column_count: 0,
            loaded_at: Utc::now(),
        }
    }
}
