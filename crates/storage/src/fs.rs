use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Error;

/// Write `content` to `target` without ever exposing a half-written file:
/// the content lands in a temp file in the target's directory first, then is
/// renamed into place.
pub fn atomic_write(target: &Path, content: &str) -> Result<(), Error> {
    let parent = target
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "target has no parent"))?;
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    std::fs::write(temp.path(), content)?;
    temp.persist(target).map_err(io::Error::from)?;
    Ok(())
}

/// Copy an existing file to a timestamped sibling (`name_bak_YYYYMMDD_HHMMSS.ext`)
/// so the version about to be overwritten stays recoverable.
///
/// Returns the backup path, or `None` when there is nothing to snapshot.
pub fn snapshot(target: &Path) -> Result<Option<PathBuf>, Error> {
    if !target.exists() {
        return Ok(None);
    }

    let stem = target
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "target has no file name"))?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");

    let backup_name = match target.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_bak_{stamp}.{ext}"),
        None => format!("{stem}_bak_{stamp}"),
    };
    let backup = target.with_file_name(backup_name);

    std::fs::copy(target, &backup)?;
    debug!(target = %target.display(), backup = %backup.display(), "snapshot taken");
    Ok(Some(backup))
}
