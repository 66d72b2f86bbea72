use super::normalize_name;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Walk the configured application roots and collect every `.app` bundle,
/// keyed by normalized display name (bundle name without the extension).
/// The walk descends into bundles so nested helper bundles are indexed too;
/// the resolver down-ranks those later. The first path seen for a name wins.
pub fn scan_application_roots(roots: &[impl AsRef<Path>]) -> BTreeMap<String, String> {
    let mut seen = BTreeMap::new();
    for root in roots {
        let root = root.as_ref();
        if !root.exists() {
            continue;
        }
        walk(root, &mut seen);
    }
    seen
}

fn walk(dir: &Path, seen: &mut BTreeMap<String, String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let is_symlink = entry
            .file_type()
            .map(|kind| kind.is_symlink())
            .unwrap_or(true);
        if is_symlink || !path.is_dir() {
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) == Some("app") {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                let name = normalize_name(stem);
                if !name.is_empty() {
                    seen.entry(name).or_insert_with(|| path.display().to_string());
                }
            }
        }
        walk(&path, seen);
    }
}
