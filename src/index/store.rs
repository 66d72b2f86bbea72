use super::{normalize_name, IndexError};
use crate::shared::fs_atomic::atomic_write_file;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Strict read: missing files, unparseable JSON and non-object payloads are
/// all errors so the caller can decide to rebuild.
pub fn read_index(path: &Path) -> Result<BTreeMap<String, String>, IndexError> {
    let raw = fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| IndexError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    let Value::Object(map) = value else {
        return Err(IndexError::NotAnObject {
            path: path.display().to_string(),
        });
    };

    let mut entries = BTreeMap::new();
    for (name, path_value) in map {
        if let Value::String(app_path) = path_value {
            entries.insert(normalize_name(&name), app_path);
        }
    }
    Ok(entries)
}

pub fn write_index(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), IndexError> {
    let rendered = serde_json::to_vec_pretty(entries).map_err(|source| IndexError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| IndexError::Write {
            path: path.display().to_string(),
            source,
        })?;
    }
    atomic_write_file(path, &rendered).map_err(|source| IndexError::Write {
        path: path.display().to_string(),
        source,
    })
}
