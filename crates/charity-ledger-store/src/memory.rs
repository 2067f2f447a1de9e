//! In-memory implementation of the RecordStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StoreError};
use crate::traits::RecordStore;

/// In-memory ordered store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
}

impl<K: Ord, V> MemoryStore<K, V> {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<K, V>>> {
        self.inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<K, V>>> {
        self.inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl<K: Ord, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecordStore<K, V> for MemoryStore<K, V>
where
    K: Ord + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Result<Option<V>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn insert(&self, key: K, value: V) -> Result<Option<V>> {
        Ok(self.write()?.insert(key, value))
    }

    fn remove(&self, key: &K) -> Result<Option<V>> {
        Ok(self.write()?.remove(key))
    }

    fn values(&self) -> Result<Vec<V>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RecordStoreExt;

    #[test]
    fn test_memory_store_basic() {
        let store: MemoryStore<String, u32> = MemoryStore::new();
        assert!(store.is_empty().unwrap());

        assert_eq!(store.insert("a".into(), 1).unwrap(), None);
        assert_eq!(store.get(&"a".into()).unwrap(), Some(1));
        assert!(store.contains_key(&"a".into()).unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_memory_store_upsert_returns_previous() {
        let store: MemoryStore<String, u32> = MemoryStore::new();
        store.insert("a".into(), 1).unwrap();

        assert_eq!(store.insert("a".into(), 2).unwrap(), Some(1));
        assert_eq!(store.get(&"a".into()).unwrap(), Some(2));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_memory_store_remove() {
        let store: MemoryStore<String, u32> = MemoryStore::new();
        store.insert("a".into(), 1).unwrap();

        assert_eq!(store.remove(&"a".into()).unwrap(), Some(1));
        assert_eq!(store.remove(&"a".into()).unwrap(), None);
        assert_eq!(store.get(&"a".into()).unwrap(), None);
    }

    #[test]
    fn test_memory_store_values_in_key_order() {
        let store: MemoryStore<String, &'static str> = MemoryStore::new();
        store.insert("c".into(), "third").unwrap();
        store.insert("a".into(), "first").unwrap();
        store.insert("b".into(), "second").unwrap();

        assert_eq!(store.values().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_memory_store_scans() {
        let store: MemoryStore<u64, u64> = MemoryStore::new();
        for i in 0..10 {
            store.insert(i, i * 10).unwrap();
        }

        assert_eq!(store.find_value(|v| *v > 45).unwrap(), Some(50));
        assert_eq!(store.filter_values(|v| v % 20 == 0).unwrap().len(), 5);
        assert_eq!(store.find_value(|v| *v > 1000).unwrap(), None);
    }

    #[test]
    fn test_returned_values_are_copies() {
        let store: MemoryStore<String, Vec<u32>> = MemoryStore::new();
        store.insert("a".into(), vec![1]).unwrap();

        let mut copy = store.get(&"a".into()).unwrap().unwrap();
        copy.push(2);

        assert_eq!(store.get(&"a".into()).unwrap(), Some(vec![1]));
    }
}
