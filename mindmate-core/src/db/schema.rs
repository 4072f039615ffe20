//! Database schema and migrations
//!
//! Uses SQLite with embedded migrations managed via PRAGMA user_version.

use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: Initial schema
    r#"
    -- Append-only chat log. Created by the chat flow; never updated or deleted.
    CREATE TABLE IF NOT EXISTS chats (
        id                INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp         TEXT NOT NULL,
        user_message      TEXT NOT NULL,
        assistant_message TEXT NOT NULL,
        mood              TEXT
    );

    -- Append-only journal log. More than one entry per date is allowed.
    CREATE TABLE IF NOT EXISTS journals (
        id    INTEGER PRIMARY KEY AUTOINCREMENT,
        date  TEXT NOT NULL,
        entry TEXT NOT NULL
    );

    -- Small key/value persistence for settings (JSON-encoded values).
    CREATE TABLE IF NOT EXISTS settings (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_chats_timestamp ON chats(timestamp);
    CREATE INDEX IF NOT EXISTS idx_journals_date ON journals(date);
    "#,
];

/// Run any pending migrations on the connection.
pub fn run_migrations(conn: &Connection) -> crate::error::Result<()> {
    let current_version: i32 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .unwrap_or(0);

    tracing::info!(
        current_version,
        target_version = SCHEMA_VERSION,
        "Checking database migrations"
    );

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i32;
        if version > current_version {
            tracing::info!(version, "Running migration");
            conn.execute_batch(migration)?;
            conn.execute(&format!("PRAGMA user_version = {}", version), [])?;
        }
    }

    if current_version < SCHEMA_VERSION {
        tracing::info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Migrations complete"
        );
    }

    Ok(())
}

/// Get the current schema version of a connection.
pub fn get_schema_version(conn: &Connection) -> crate::error::Result<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
}
