//! Snapshot files: a whole timecard, lines and transitions included, as JSON.
//!
//! This is the persistence collaborator the `timecard` binary uses. Each
//! file holds exactly one timecard; saving bumps `recVersion` so a stale
//! copy is recognisable.

use std::{fs, io, path::Path, path::PathBuf};

use crate::timecard::Timecard;

/// Errors that can occur while reading or writing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("no timecard at {}", .0.display())]
    NotFound(PathBuf),

    #[error("a timecard already exists at {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, SnapshotError>;

/// Writes a new snapshot. Refuses to overwrite an existing file.
pub fn create(path: &Path, timecard: &Timecard) -> Result<()> {
    if path.exists() {
        return Err(SnapshotError::AlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    write(path, timecard)
}

/// Loads the timecard stored at `path`.
pub fn load(path: &Path) -> Result<Timecard> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SnapshotError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&json)?)
}

/// Overwrites an existing snapshot, bumping the record version.
pub fn save(path: &Path, timecard: &mut Timecard) -> Result<()> {
    if !path.exists() {
        return Err(SnapshotError::NotFound(path.to_path_buf()));
    }
    timecard.record_version += 1;
    write(path, timecard)
}

fn write(path: &Path, timecard: &Timecard) -> Result<()> {
    let json = serde_json::to_string_pretty(timecard)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), id = %timecard.id(), "snapshot written");
    Ok(())
}
