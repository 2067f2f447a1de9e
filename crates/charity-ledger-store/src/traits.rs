//! RecordStore trait: the abstract interface for ordered record persistence.
//!
//! This trait lets repositories stay storage-agnostic. Implementations
//! include SQLite (durable) and in-memory (for tests).

use std::sync::Arc;

use charity_ledger_core::{CharityId, DonationId};

use crate::error::Result;

/// A key with an order-preserving byte encoding.
///
/// For any two keys, `a.cmp(&b)` must equal
/// `a.encode_key().cmp(&b.encode_key())`. Backends that sort raw bytes
/// (SQLite BLOB columns) rely on this to iterate in key order.
pub trait RecordKey: Ord + Clone + Send + Sync {
    fn encode_key(&self) -> Vec<u8>;
}

impl RecordKey for String {
    fn encode_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl RecordKey for u64 {
    fn encode_key(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }
}

impl RecordKey for CharityId {
    fn encode_key(&self) -> Vec<u8> {
        self.as_str().as_bytes().to_vec()
    }
}

impl RecordKey for DonationId {
    fn encode_key(&self) -> Vec<u8> {
        self.as_str().as_bytes().to_vec()
    }
}

/// The RecordStore trait: an ordered map from `K` to `V`.
///
/// # Design Notes
///
/// - **Upsert**: `insert` on an existing key overwrites it and returns the
///   previous value. Uniqueness checks belong to the caller.
/// - **Value semantics**: every read returns an owned copy. Mutating it has
///   no effect until it is written back with `insert`.
/// - **Ordering**: `values` yields records in ascending key order.
/// - **Durability**: a mutating call has persisted its change when it
///   returns (for backends that persist at all).
/// - **No domain validation**: the store accepts any well-formed key.
pub trait RecordStore<K, V>: Send + Sync {
    /// Get the value stored under `key`.
    fn get(&self, key: &K) -> Result<Option<V>>;

    /// Store `value` under `key`, returning the value it replaced.
    fn insert(&self, key: K, value: V) -> Result<Option<V>>;

    /// Remove and return the value under `key`.
    fn remove(&self, key: &K) -> Result<Option<V>>;

    /// All values, in ascending key order.
    fn values(&self) -> Result<Vec<V>>;

    /// Number of stored records.
    fn len(&self) -> Result<usize>;

    /// True if the store holds no records.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// True if a value is stored under `key`.
    fn contains_key(&self, key: &K) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Extension trait for full-value scans.
///
/// These are linear in the collection size. The ledger has no secondary
/// indexes; filter-by-field is always a scan over `values`.
pub trait RecordStoreExt<K, V>: RecordStore<K, V> {
    /// First value (in key order) matching `predicate`.
    fn find_value<P>(&self, predicate: P) -> Result<Option<V>>
    where
        P: FnMut(&V) -> bool,
    {
        let mut predicate = predicate;
        Ok(self.values()?.into_iter().find(|v| predicate(v)))
    }

    /// All values (in key order) matching `predicate`.
    fn filter_values<P>(&self, predicate: P) -> Result<Vec<V>>
    where
        P: FnMut(&V) -> bool,
    {
        let mut predicate = predicate;
        Ok(self
            .values()?
            .into_iter()
            .filter(|v| predicate(v))
            .collect())
    }
}

impl<K, V, S: RecordStore<K, V> + ?Sized> RecordStoreExt<K, V> for S {}

impl<K, V, S: RecordStore<K, V> + ?Sized> RecordStore<K, V> for Box<S> {
    fn get(&self, key: &K) -> Result<Option<V>> {
        (**self).get(key)
    }

    fn insert(&self, key: K, value: V) -> Result<Option<V>> {
        (**self).insert(key, value)
    }

    fn remove(&self, key: &K) -> Result<Option<V>> {
        (**self).remove(key)
    }

    fn values(&self) -> Result<Vec<V>> {
        (**self).values()
    }

    fn len(&self) -> Result<usize> {
        (**self).len()
    }
}

impl<K, V, S: RecordStore<K, V> + ?Sized> RecordStore<K, V> for Arc<S> {
    fn get(&self, key: &K) -> Result<Option<V>> {
        (**self).get(key)
    }

    fn insert(&self, key: K, value: V) -> Result<Option<V>> {
        (**self).insert(key, value)
    }

    fn remove(&self, key: &K) -> Result<Option<V>> {
        (**self).remove(key)
    }

    fn values(&self) -> Result<Vec<V>> {
        (**self).values()
    }

    fn len(&self) -> Result<usize> {
        (**self).len()
    }
}
