//! # Charity Ledger Store
//!
//! Storage abstraction for the Charity Ledger. Provides a trait-based
//! interface for ordered record persistence with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! The store module abstracts record storage behind the [`RecordStore`]
//! trait, allowing repositories to be storage-agnostic. The durable
//! implementation is [`SqliteStore`], with [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - Ordered map: get, insert, remove, values, len
//! - [`RecordStoreExt`] - Full-value scans built on `values`
//! - [`RecordKey`] - Order-preserving key encoding
//! - [`SqliteStore`] / [`SqliteCollection`] - SQLite database and typed collection views
//! - [`MemoryStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use charity_ledger_store::{RecordStore, SqliteStore};
//!
//! let store = SqliteStore::open("ledger.db").unwrap();
//! let names = store.collection::<String, String>("names");
//!
//! names.insert("k".to_string(), "v".to_string()).unwrap();
//! assert_eq!(names.get(&"k".to_string()).unwrap().as_deref(), Some("v"));
//! ```
//!
//! ## Design Notes
//!
//! - **Upsert inserts**: uniqueness is the caller's job
//! - **Key-ordered iteration**: `values` is sorted by encoded key
//! - **Copies out**: reads never alias stored state

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::{SqliteCollection, SqliteStore};
pub use traits::{RecordKey, RecordStore, RecordStoreExt};
