#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Single-file `SQLite` report store.
//!
//! Uses `switchy_database` for all database operations. The store is
//! append-only: reports are inserted exactly once after validation and
//! never updated or deleted. Listing queries are filtered and paginated
//! with an id-based cursor (ids are time-derived and monotonic, so id
//! order matches `created_at` order).

pub mod queries;

use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};

use switchy_database::Database;
use switchy_database_connection::init_sqlite_rusqlite;
use thiserror::Error;

/// Default path for the reports database.
pub const DEFAULT_DB_PATH: &str = "data/reports.db";

/// Errors from report store operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// A database query or command failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be converted to its typed form.
    #[error("Data conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

/// Opens (or creates) the reports `SQLite` database and ensures the
/// schema exists.
///
/// # Errors
///
/// Returns [`DbError`] if the database cannot be opened or schema
/// creation fails.
pub async fn open_db(path: &Path) -> Result<Box<dyn Database>, DbError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = init_sqlite_rusqlite(Some(path)).map_err(|e| DbError::Database(e.to_string()))?;

    ensure_schema(db.as_ref()).await?;

    Ok(db)
}

/// Opens the database at `DATABASE_PATH`, falling back to
/// [`DEFAULT_DB_PATH`].
///
/// # Errors
///
/// Returns [`DbError`] if the database cannot be opened or schema
/// creation fails.
pub async fn open_from_env() -> Result<Box<dyn Database>, DbError> {
    let path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    open_db(Path::new(&path)).await
}

/// Creates the reports table and indexes if they don't already exist.
async fn ensure_schema(db: &dyn Database) -> Result<(), DbError> {
    db.exec_raw(
        "CREATE TABLE IF NOT EXISTS reports (
            id              INTEGER PRIMARY KEY,
            plate           TEXT NOT NULL,
            state_code      TEXT NOT NULL,
            city            TEXT NOT NULL,
            violation       TEXT NOT NULL,
            vehicle_type    TEXT NOT NULL,
            color           TEXT NOT NULL,
            make            TEXT,
            model           TEXT,
            year            INTEGER,
            gender_observed TEXT,
            description     TEXT,
            reporter_email  TEXT,
            contact_ok      INTEGER NOT NULL DEFAULT 0,
            incident_at     TEXT NOT NULL,
            created_at      TEXT NOT NULL,
            media_count     INTEGER NOT NULL DEFAULT 0
        )",
    )
    .await
    .map_err(|e| DbError::Database(e.to_string()))?;

    db.exec_raw(
        "CREATE INDEX IF NOT EXISTS idx_reports_created
         ON reports (created_at, id)",
    )
    .await
    .map_err(|e| DbError::Database(e.to_string()))?;

    db.exec_raw(
        "CREATE INDEX IF NOT EXISTS idx_reports_state
         ON reports (state_code)",
    )
    .await
    .map_err(|e| DbError::Database(e.to_string()))?;

    Ok(())
}

/// Generator for time-derived report ids.
///
/// Ids are epoch milliseconds, bumped past the previously issued id so
/// they stay strictly monotonic even when the clock stalls or two
/// submissions land in the same millisecond.
#[derive(Debug, Default)]
pub struct ReportIds {
    last: AtomicI64,
}

impl ReportIds {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Issues the next report id.
    pub fn next(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .map_or(now, |last| now.max(last + 1))
    }
}
