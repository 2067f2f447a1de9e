//! SQLite implementation of the RecordStore trait.
//!
//! This is the durable backend. One database file holds every collection;
//! each [`SqliteCollection`] is a typed view over the rows tagged with its
//! name. Values are CBOR-encoded with ciborium.

use std::marker::PhantomData;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::{RecordKey, RecordStore};

/// SQLite-based database handle.
///
/// Thread-safe via internal Mutex. Every statement runs in autocommit mode
/// or in its own short transaction, so each call is durable on return.
#[derive(Clone)]
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// A typed view over the collection called `name`.
    ///
    /// Views over the same name share rows; views over different names never
    /// see each other's records.
    pub fn collection<K, V>(&self, name: impl Into<String>) -> SqliteCollection<K, V> {
        SqliteCollection {
            conn: Arc::clone(&self.conn),
            name: name.into(),
            _marker: PhantomData,
        }
    }
}

/// One named collection inside a [`SqliteStore`].
pub struct SqliteCollection<K, V> {
    conn: Arc<Mutex<Connection>>,
    name: String,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> SqliteCollection<K, V> {
    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl<K, V: DeserializeOwned> SqliteCollection<K, V> {
    fn decode(&self, bytes: &[u8]) -> Result<V> {
        ciborium::from_reader(bytes).map_err(|e| StoreError::InvalidData {
            collection: self.name.clone(),
            reason: e.to_string(),
        })
    }

    fn select(&self, conn: &Connection, key: &[u8]) -> Result<Option<V>> {
        let bytes: Option<Vec<u8>> = conn
            .query_row(
                "SELECT value FROM records WHERE collection = ?1 AND key = ?2",
                params![self.name, key],
                |row| row.get(0),
            )
            .optional()?;

        bytes.map(|b| self.decode(&b)).transpose()
    }
}

// Helper to encode a value to CBOR
fn encode_value<V: Serialize>(value: &V) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(buf)
}

impl<K, V> RecordStore<K, V> for SqliteCollection<K, V>
where
    K: RecordKey,
    V: Serialize + DeserializeOwned,
{
    fn get(&self, key: &K) -> Result<Option<V>> {
        let conn = self.lock()?;
        self.select(&conn, &key.encode_key())
    }

    fn insert(&self, key: K, value: V) -> Result<Option<V>> {
        let key = key.encode_key();
        let encoded = encode_value(&value)?;

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let previous = self.select(&tx, &key)?;
        tx.execute(
            "INSERT INTO records (collection, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT (collection, key) DO UPDATE SET value = excluded.value",
            params![self.name, key, encoded],
        )?;

        tx.commit()?;
        Ok(previous)
    }

    fn remove(&self, key: &K) -> Result<Option<V>> {
        let key = key.encode_key();

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let previous = self.select(&tx, &key)?;
        if previous.is_some() {
            tx.execute(
                "DELETE FROM records WHERE collection = ?1 AND key = ?2",
                params![self.name, key],
            )?;
        }

        tx.commit()?;
        Ok(previous)
    }

    fn values(&self) -> Result<Vec<V>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT value FROM records WHERE collection = ?1 ORDER BY key")?;

        let rows = stmt
            .query_map(params![self.name], |row| row.get::<_, Vec<u8>>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.iter().map(|bytes| self.decode(bytes)).collect()
    }

    fn len(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM records WHERE collection = ?1",
            params![self.name],
            |row| row.get(0),
        )?;

        usize::try_from(count).map_err(|e| StoreError::InvalidData {
            collection: self.name.clone(),
            reason: e.to_string(),
        })
    }
}
