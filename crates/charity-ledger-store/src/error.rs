//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// None of these are domain errors. A well-formed key never fails on a
/// healthy store; these surface broken storage to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Value could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded.
    #[error("invalid data in collection {collection}: {reason}")]
    InvalidData { collection: String, reason: String },

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
