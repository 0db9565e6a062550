//! Schema versioning for the journal database.
//!
//! A version number recorded in the `metadata` table gates schema
//! creation. Opening a database whose recorded version is behind
//! [`CURRENT_VERSION`] runs each pending upgrade step exactly once.
//! Upgrades only add collections and indexes; existing records are never
//! rewritten.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::SCHEMA_STATEMENTS;

/// The current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Key used to store the schema version in the metadata table.
const VERSION_KEY: &str = "schema_version";

/// Initialize the journal schema.
///
/// Creates all tables and indexes if they don't exist, then runs any
/// pending upgrade steps to bring the recorded version up to
/// [`CURRENT_VERSION`].
///
/// # Errors
///
/// Returns [`Error::SchemaUpgrade`] if schema creation or an upgrade step
/// fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])
            .map_err(|e| Error::schema_upgrade(e.to_string()))?;
    }

    let version = get_schema_version(conn)?;
    if version < CURRENT_VERSION {
        run_upgrades(conn, version)?;
    }

    Ok(())
}

/// Get the recorded schema version.
///
/// Returns 0 if no version is set (fresh database).
fn get_schema_version(conn: &Connection) -> Result<i32> {
    let result: std::result::Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM metadata WHERE key = ?1",
        [VERSION_KEY],
        |row| row.get(0),
    );

    match result {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::schema_upgrade(format!("invalid schema version: {value}"))),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(Error::schema_upgrade(e.to_string())),
    }
}

/// Record the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
        (VERSION_KEY, version.to_string()),
    )
    .map_err(|e| Error::schema_upgrade(e.to_string()))?;
    Ok(())
}

/// Run upgrade steps from the given version to the current version.
fn run_upgrades(conn: &Connection, from_version: i32) -> Result<()> {
    let mut current = from_version;

    while current < CURRENT_VERSION {
        current += 1;
        run_upgrade(conn, current)?;
    }

    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Run a specific upgrade step.
fn run_upgrade(conn: &Connection, version: i32) -> Result<()> {
    match version {
        1 => upgrade_v1(conn),
        _ => Err(Error::schema_upgrade(format!(
            "unknown upgrade version: {version}"
        ))),
    }
}

/// Upgrade to version 1 (initial schema).
///
/// A no-op beyond recording the version, since version 1 is the base
/// schema created by `SCHEMA_STATEMENTS`.
fn upgrade_v1(conn: &Connection) -> Result<()> {
    set_schema_version(conn, 1)
}
