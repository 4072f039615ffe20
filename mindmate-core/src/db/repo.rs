//! Database repository layer
//!
//! Provides append and query operations for the chat log, journal log,
//! and key-value settings. The chat and journal tables are append-only;
//! nothing here updates or deletes a stored record.

use crate::error::{Error, Result};
use crate::settings::SettingsStore;
use crate::types::{ChatRecord, JournalRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::PathBuf;
use std::sync::Mutex;

/// Database handle with connection pooling (single connection for now)
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: &PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for better concurrency
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run migrations on this database
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        super::schema::run_migrations(&conn)
    }

    /// Get the underlying connection (for advanced use)
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }

    // ============================================
    // Chat operations
    // ============================================

    /// Append a chat exchange. Returns the new row id.
    pub fn append_chat(&self, record: &ChatRecord) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO chats (timestamp, user_message, assistant_message, mood)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                record.timestamp,
                record.user_message,
                record.assistant_message,
                record.mood,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Full chat history, newest-first.
    pub fn chat_history(&self) -> Result<Vec<ChatRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, timestamp, user_message, assistant_message, mood
             FROM chats ORDER BY id DESC",
        )?;
        let records = stmt
            .query_map([], Self::row_to_chat)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// The most recent chats, newest-first.
    pub fn recent_chats(&self, limit: usize) -> Result<Vec<ChatRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, timestamp, user_message, assistant_message, mood
             FROM chats ORDER BY id DESC LIMIT ?",
        )?;
        let records = stmt
            .query_map([limit as i64], Self::row_to_chat)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Total number of chat exchanges stored.
    pub fn count_chats(&self) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let count = conn.query_row("SELECT COUNT(*) FROM chats", [], |r| r.get(0))?;
        Ok(count)
    }

    fn row_to_chat(row: &Row) -> rusqlite::Result<ChatRecord> {
        Ok(ChatRecord {
            id: Some(row.get(0)?),
            timestamp: row.get(1)?,
            user_message: row.get(2)?,
            assistant_message: row.get(3)?,
            mood: row.get(4)?,
        })
    }

    // ============================================
    // Journal operations
    // ============================================

    /// Append a journal entry. Returns the new row id.
    pub fn append_journal(&self, record: &JournalRecord) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO journals (date, entry) VALUES (?1, ?2)",
            params![record.date, record.entry],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Full journal history, newest-first.
    pub fn journal_history(&self) -> Result<Vec<JournalRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, date, entry FROM journals ORDER BY id DESC")?;
        let records = stmt
            .query_map([], Self::row_to_journal)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Total number of journal entries stored.
    pub fn count_journals(&self) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let count = conn.query_row("SELECT COUNT(*) FROM journals", [], |r| r.get(0))?;
        Ok(count)
    }

    fn row_to_journal(row: &Row) -> rusqlite::Result<JournalRecord> {
        Ok(JournalRecord {
            id: Some(row.get(0)?),
            date: row.get(1)?,
            entry: row.get(2)?,
        })
    }
}

// ============================================
// Settings store
// ============================================

impl SettingsStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT value FROM settings WHERE key = ?", [key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(Error::from)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
