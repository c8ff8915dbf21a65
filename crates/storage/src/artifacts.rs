use std::path::PathBuf;

use tracing::info;

use crate::error::Error;
use crate::fs;

/// One fully rendered artifact, ready to be persisted.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// What one guarded write pass touched.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub backups: Vec<PathBuf>,
}

/// Persist a set of already-rendered artifacts, snapshotting every existing
/// target first.
///
/// The caller renders everything in memory before calling this, so the
/// artifact set is regenerated together or not at all: the snapshot phase
/// completes for all targets before the first overwrite happens, and each
/// overwrite itself is atomic.
pub fn write_all(artifacts: &[Artifact]) -> Result<WriteReport, Error> {
    let mut report = WriteReport::default();

    for artifact in artifacts {
        if let Some(backup) = fs::snapshot(&artifact.path)? {
            report.backups.push(backup);
        }
    }

    for artifact in artifacts {
        fs::atomic_write(&artifact.path, &artifact.content)?;
        info!(path = %artifact.path.display(), "artifact written");
        report.written.push(artifact.path.clone());
    }

    Ok(report)
}
