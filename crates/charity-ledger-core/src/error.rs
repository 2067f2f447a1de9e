//! Error types for the Charity Ledger Core.

use thiserror::Error;

use crate::types::Amount;

/// Validation errors for charity payloads, ids, and donation amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field {field} exceeds maximum length of {max} bytes")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("id must not be empty")]
    EmptyId,

    #[error("donation amount must be greater than zero, got {0}")]
    NonPositiveAmount(Amount),

    #[error("donation of {amount} would overflow available funds of {available}")]
    FundOverflow { available: Amount, amount: Amount },
}
