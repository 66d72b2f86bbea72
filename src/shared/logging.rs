use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn runtime_log_path(state_root: &Path) -> PathBuf {
    state_root.join("logs/runtime.log")
}

/// Best-effort: a failed append must never surface to the caller.
pub fn append_runtime_log_line(state_root: &Path, line: &str) {
    let path = runtime_log_path(state_root);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let stamp = chrono::Utc::now().to_rfc3339();
    let _ = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| file.write_all(format!("{stamp} {line}\n").as_bytes()));
}
