//! Input validation: required fields, ids, and donation amounts.

use crate::charity::CharityPayload;
use crate::error::ValidationError;
use crate::types::Amount;

/// Default upper bound on a single payload field, in bytes.
pub const DEFAULT_MAX_FIELD_LEN: usize = 1024;

/// Validate a charity payload for create or update.
///
/// This performs:
/// - Presence check on every settable field
/// - Length check against `max_field_len`
///
/// Fields are checked in declaration order; the first failure is reported.
pub fn validate_charity_payload(
    payload: &CharityPayload,
    max_field_len: usize,
) -> Result<(), ValidationError> {
    for (field, value) in payload.fields() {
        // 1. Required
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }

        // 2. Bounded
        if value.len() > max_field_len {
            return Err(ValidationError::FieldTooLong {
                field,
                max: max_field_len,
            });
        }
    }

    Ok(())
}

/// Reject the empty id before any lookup is attempted.
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    Ok(())
}

/// A donation amount must be strictly positive.
pub fn validate_amount(amount: Amount) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}
