//! Error types for the Ledger.

use charity_ledger_core::{CharityId, DonationId, ValidationError};
use charity_ledger_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Malformed or missing input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A charity with this name already exists.
    #[error("charity with name {name:?} already exists")]
    Conflict { name: String },

    /// Charity not found.
    #[error("charity not found: {0}")]
    CharityNotFound(CharityId),

    /// Donation not found.
    #[error("donation not found: {0}")]
    DonationNotFound(DonationId),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Coarse classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Storage,
}

impl LedgerError {
    /// The kind of failure, for callers that only branch on category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Validation(_) => ErrorKind::Validation,
            LedgerError::Conflict { .. } => ErrorKind::Conflict,
            LedgerError::CharityNotFound(_) | LedgerError::DonationNotFound(_) => {
                ErrorKind::NotFound
            }
            LedgerError::Store(_) => ErrorKind::Storage,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
