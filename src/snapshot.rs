//! Point-in-time copy of the history database.
//!
//! Chrome keeps its live database open (and possibly locked) while the
//! browser runs, so the pipeline never opens the source directly. It copies
//! the file into a private temporary directory and reads the copy.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to create a temporary directory")]
    TempDir(#[source] std::io::Error),
    #[error("the file \"{}\" could not be copied for reading", .path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Private copy of the source database, removed on drop.
///
/// The backing directory is deleted when the value goes out of scope, on
/// success and on every later failure path alike.
#[derive(Debug)]
pub struct Snapshot {
    dir: TempDir,
    db_path: PathBuf,
}

impl Snapshot {
    pub fn create(source: &Path) -> Result<Self, SnapshotError> {
        let dir = tempfile::Builder::new()
            .prefix("export-chrome-history-")
            .tempdir()
            .map_err(SnapshotError::TempDir)?;
        let db_path = dir.path().join("History");
        fs::copy(source, &db_path).map_err(|err| SnapshotError::Copy {
            path: source.to_path_buf(),
            source: err,
        })?;
        debug!("snapshot at {}", db_path.display());
        Ok(Self { dir, db_path })
    }

    /// Path of the copied database inside the temporary directory.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Path of the temporary directory itself.
    pub fn dir_path(&self) -> &Path {
        self.dir.path()
    }
}
