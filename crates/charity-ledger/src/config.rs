//! Ledger configuration.

use std::path::PathBuf;

use charity_ledger_core::DEFAULT_MAX_FIELD_LEN;

/// Where the ledger keeps its collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// In-memory only; everything is lost on drop.
    Memory,
    /// A SQLite database file, created and migrated on open.
    Sqlite { path: PathBuf },
}

/// Configuration for the Ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Storage backend.
    pub storage: StorageConfig,
    /// Maximum length in bytes of any charity payload field.
    pub max_field_len: usize,
}

impl LedgerConfig {
    /// In-memory ledger with default limits.
    pub fn memory() -> Self {
        Self::default()
    }

    /// SQLite-backed ledger at `path` with default limits.
    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageConfig::Sqlite { path: path.into() },
            ..Self::default()
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::Memory,
            max_field_len: DEFAULT_MAX_FIELD_LEN,
        }
    }
}
