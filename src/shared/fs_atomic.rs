use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

fn scratch_name(target: &Path) -> String {
    let stem = target
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("file");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!(".{stem}.{}-{nanos}.partial", std::process::id())
}

/// Readers observe either the old or the new contents, never a partial file.
pub fn atomic_write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("target path has no parent directory"))?;
    let scratch = parent.join(scratch_name(path));

    let mut file = fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&scratch)?;
    if let Err(err) = file.write_all(content).and_then(|_| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(&scratch);
        return Err(err);
    }
    drop(file);

    fs::rename(&scratch, path)?;

    // The rename itself must survive a crash as well.
    #[cfg(unix)]
    fs::File::open(parent)?.sync_all()?;
    Ok(())
}
