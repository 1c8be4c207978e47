/// Storage layer: the key-value capability the core persists through
///
/// The core never touches files or SQL directly; it consumes a synchronous
/// string-keyed `KeyValueStore` with last-write-wins semantics. The
/// production implementation sits on SQLite; an in-memory implementation
/// backs tests and embedding scenarios.

pub mod keys;
pub mod memory;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable, synchronous, last-write-wins key-value storage
///
/// Values are self-contained serialized strings. The store offers no
/// transactionality; multi-key updates are sequenced by the caller, and a
/// process kill between two writes can leave at most one day's drift (the
/// ledger resolves it on the next rollover).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn has(&self, key: &str) -> Result<bool, StorageError>;
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
    fn flush(&mut self) -> Result<(), StorageError>;

    /// Read a numeric value, falling back to `default` when the key is
    /// absent or holds something unparseable (malformed state self-heals).
    fn get_f64(&self, key: &str, default: f64) -> Result<f64, StorageError> {
        match self.get(key)? {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) => Ok(v),
                Err(_) => {
                    tracing::warn!(key, value = %raw, "malformed numeric value, using default");
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    /// Write a numeric value as its decimal string form
    fn set_f64(&mut self, key: &str, value: f64) -> Result<(), StorageError> {
        self.set(key, &value.to_string())
    }
}
