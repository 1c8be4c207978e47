/// SQLite implementation of the key-value store
///
/// A single `kv(key TEXT PRIMARY KEY, value TEXT)` table holds every
/// persisted value. SQLite commits each statement synchronously, so `flush`
/// has nothing extra to do; it exists to satisfy the capability contract.

use std::path::PathBuf;

use rusqlite::{params, Connection, OptionalExtension};

use crate::storage::{KeyValueStore, StorageError};

pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Open (or create) the store at the given path
    pub fn open(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("failed to open database: {}", e)))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        tracing::info!("key-value store opened at: {:?}", db_path);
        Ok(Self { conn })
    }

    /// Open an in-process store that disappears on drop (tests, dry runs)
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("failed to open database: {}", e)))?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn has(&self, key: &str) -> Result<bool, StorageError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM kv WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        // Statements commit synchronously; nothing buffered to write out.
        Ok(())
    }
}
