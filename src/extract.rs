//! Read visit records from a snapshot of the history database.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, ErrorCode, OpenFlags};
use thiserror::Error;

const VISIT_QUERY: &str = "SELECT id, last_visit_time, title, url, typed_count, visit_count \
     FROM urls ORDER BY last_visit_time DESC";

/// One row of the `urls` table.
#[derive(Debug, Clone)]
pub struct VisitRecord {
    pub id: i64,
    pub title: String,
    pub url: String,
    /// Microseconds since 1601-01-01T00:00:00 UTC.
    pub last_visit_time: i64,
    pub typed_count: i64,
    pub visit_count: i64,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("the file \"{}\" could not be opened for reading", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("there was an error reading data from the file \"{}\"", .path.display())]
    Query {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

/// Read titled visits from the snapshot, most recent first.
///
/// Rows with an empty title are discarded; nothing else is filtered.
/// `original` is the user-facing path reported in errors, since the
/// snapshot lives under a temporary path that would mean nothing to the
/// user.
pub fn read_visits(snapshot_db: &Path, original: &Path) -> Result<Vec<VisitRecord>, ExtractError> {
    let conn = Connection::open_with_flags(
        snapshot_db,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| ExtractError::Open {
        path: original.to_path_buf(),
        source: err,
    })?;

    // SQLite opens files lazily, so a non-database file often only fails
    // here; classify() keys on the error code rather than the call site.
    let mut stmt = conn
        .prepare(VISIT_QUERY)
        .map_err(|err| classify(original, err))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(VisitRecord {
                id: row.get(0)?,
                last_visit_time: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                url: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                typed_count: row.get::<_, Option<i64>>(4)?.unwrap_or(0),
                visit_count: row.get::<_, Option<i64>>(5)?.unwrap_or(0),
            })
        })
        .map_err(|err| classify(original, err))?;

    let mut out = Vec::new();
    for row in rows {
        let record = row.map_err(|err| classify(original, err))?;
        if record.title.is_empty() {
            continue;
        }
        out.push(record);
    }
    Ok(out)
}

fn classify(original: &Path, err: rusqlite::Error) -> ExtractError {
    let not_a_db = matches!(
        &err,
        rusqlite::Error::SqliteFailure(failure, _) if failure.code == ErrorCode::NotADatabase
    );
    if not_a_db {
        ExtractError::Open {
            path: original.to_path_buf(),
            source: err,
        }
    } else {
        ExtractError::Query {
            path: original.to_path_buf(),
            source: err,
        }
    }
}
