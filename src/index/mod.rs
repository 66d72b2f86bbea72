pub mod discover;
pub mod resolve;
pub mod store;

pub use discover::scan_application_roots;
pub use resolve::{prefer_primary, resolve, score_match, MatchCandidate, MatchTier};
pub use store::{read_index, write_index};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read app index {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse app index {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("app index {path} is not a JSON object")]
    NotAnObject { path: String },
    #[error("failed to write app index {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Lowercase, trim, collapse internal whitespace. Index keys and resolver
/// queries go through the same normalization.
pub fn normalize_name(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Process-scoped name→path mapping over discovered applications. Lazily
/// populated on first use, immutable between rebuilds; a rebuild constructs
/// the replacement mapping off to the side and swaps it in whole.
#[derive(Debug)]
pub struct AppIndex {
    store_path: PathBuf,
    scan_roots: Vec<PathBuf>,
    cached: Option<BTreeMap<String, String>>,
}

impl AppIndex {
    pub fn new(store_path: PathBuf, scan_roots: Vec<PathBuf>) -> Self {
        Self {
            store_path,
            scan_roots,
            cached: None,
        }
    }

    /// For callers that already hold a mapping and need no backing store.
    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self {
            store_path: PathBuf::new(),
            scan_roots: Vec::new(),
            cached: Some(entries),
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Never fails: a missing or corrupt store triggers a rebuild, and a
    /// failed rebuild degrades to an empty index until the next rebuild.
    pub fn load(&mut self) -> &BTreeMap<String, String> {
        let store_path = &self.store_path;
        let scan_roots = &self.scan_roots;
        self.cached.get_or_insert_with(|| {
            match read_index(store_path) {
                Ok(entries) => entries,
                Err(_) => {
                    let entries = scan_application_roots(scan_roots);
                    // Re-persisting is best-effort here; the scan result is
                    // still served from memory.
                    if !store_path.as_os_str().is_empty() {
                        let _ = write_index(store_path, &entries);
                    }
                    entries
                }
            }
        })
    }

    /// Rescan the application roots and persist the result. The in-memory
    /// cache is only replaced once the new mapping is complete.
    pub fn rebuild(&mut self) -> Result<BTreeMap<String, String>, IndexError> {
        let entries = scan_application_roots(&self.scan_roots);
        if !self.store_path.as_os_str().is_empty() {
            write_index(&self.store_path, &entries)?;
        }
        self.cached = Some(entries.clone());
        Ok(entries)
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
