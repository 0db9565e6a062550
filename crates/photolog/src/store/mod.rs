//! The record store: durable persistence for journal entries.
//!
//! One named `SQLite` database per user, one `entries` collection keyed by
//! id. Opening is idempotent: schema creation and version upgrades happen
//! on first use and reopening an up-to-date database is side-effect-free.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::entry::Entry;
use crate::error::{Error, Result};

/// Persistent store for journal entries.
///
/// Owns the underlying database handle for its whole lifetime. Writes and
/// reads each run as a single implicit transaction; a `put` either fully
/// commits or fully fails, there is no partial write of an entry's fields.
#[derive(Debug)]
pub struct RecordStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl RecordStore {
    /// Open or create the journal database at the given path.
    ///
    /// Creates the parent directories and database file if they don't
    /// exist, then creates or upgrades the schema.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] if the database cannot be
    /// opened or the schema upgrade fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening journal database at {}", path.display());
        let conn = Connection::open(&path)
            .map_err(|e| Error::storage_unavailable(&path, e.to_string()))?;

        // WAL keeps gallery reads cheap while a save is in flight
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")
            .map_err(|e| Error::storage_unavailable(&path, e.to_string()))?;

        migrations::initialize_schema(&conn)
            .map_err(|e| Error::storage_unavailable(&path, e.to_string()))?;

        info!("Journal database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let path = PathBuf::from(":memory:");
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::storage_unavailable(&path, e.to_string()))?;

        migrations::initialize_schema(&conn)
            .map_err(|e| Error::storage_unavailable(&path, e.to_string()))?;

        Ok(Self { path, conn })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Upsert an entry by primary key and return its id.
    ///
    /// An entry without an id gets the next value from the store's
    /// monotonic allocator; an entry that carries an existing id
    /// overwrites that record rather than duplicating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFailed`] if the write transaction aborts.
    pub fn put(&self, entry: &Entry) -> Result<i64> {
        let created_at = entry.created_at.to_rfc3339();

        self.conn
            .execute(
                r"
                INSERT OR REPLACE INTO entries (id, image, description, created_at)
                VALUES (?1, ?2, ?3, ?4)
                ",
                params![entry.id, entry.image, entry.description, created_at],
            )
            .map_err(|source| Error::WriteFailed { source })?;

        let id = entry
            .id
            .unwrap_or_else(|| self.conn.last_insert_rowid());
        debug!("Stored entry {} ({} bytes)", id, entry.image.len());
        Ok(id)
    }

    /// Read every entry in the store.
    ///
    /// Order is unspecified at this layer; callers that need recency
    /// ordering sort on `created_at` themselves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailed`] if the read transaction fails.
    pub fn get_all(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, image, description, created_at FROM entries")
            .map_err(|source| Error::ReadFailed { source })?;

        let entries = stmt
            .query_map([], Self::row_to_entry)
            .map_err(|source| Error::ReadFailed { source })?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|source| Error::ReadFailed { source })?;

        Ok(entries)
    }

    /// Count entries in the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailed`] if the read transaction fails.
    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .map_err(|source| Error::ReadFailed { source })
    }

    /// Get journal statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailed`] if the read transaction fails.
    pub fn stats(&self) -> Result<StoreStats> {
        let total_entries = self.count()?;

        let oldest: Option<String> = self
            .conn
            .query_row(
                "SELECT created_at FROM entries ORDER BY created_at ASC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|source| Error::ReadFailed { source })?;

        let newest: Option<String> = self
            .conn
            .query_row(
                "SELECT created_at FROM entries ORDER BY created_at DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|source| Error::ReadFailed { source })?;

        let oldest_entry = oldest
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        let newest_entry = newest
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StoreStats {
            total_entries,
            oldest_entry,
            newest_entry,
            db_size_bytes,
        })
    }

    /// Convert a database row to an [`Entry`].
    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<Entry> {
        let id: i64 = row.get(0)?;
        let image: Vec<u8> = row.get(1)?;
        let description: String = row.get(2)?;
        let created_at_str: String = row.get(3)?;

        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

        Ok(Entry {
            id: Some(id),
            image,
            description,
            created_at,
        })
    }
}

/// Statistics about the journal store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Total number of entries stored.
    pub total_entries: i64,
    /// Creation timestamp of the oldest entry.
    pub oldest_entry: Option<DateTime<Utc>>,
    /// Creation timestamp of the newest entry.
    pub newest_entry: Option<DateTime<Utc>>,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}
