use rusqlite::{Connection, OptionalExtension, Result};
use std::path::Path;
use tracing::warn;

/// Key under which the last applied theme is kept.
pub const THEME_KEY: &str = "theme";

pub fn init_store(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!("Could not create {}: {}", parent.display(), e);
        }
    }
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    Ok(conn)
}

pub fn init_memory_store() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Opens the file store, or an in-memory one when there is no usable file.
pub fn open_or_memory(path: Option<&Path>) -> Result<Connection> {
    if let Some(path) = path {
        match init_store(path) {
            Ok(conn) => return Ok(conn),
            Err(e) => warn!(
                "Local storage at {} unusable, keeping it in memory: {}",
                path.display(),
                e
            ),
        }
    }
    init_memory_store()
}

fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

pub fn get_item(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM local_storage WHERE key = ?",
        rusqlite::params![key],
        |row| row.get(0),
    )
    .optional()
}

pub fn set_item(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO local_storage (key, value) VALUES (?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        rusqlite::params![key, value],
    )?;
    Ok(())
}
