//! # Charity Ledger Core
//!
//! Pure records for the Charity Ledger: charities, donations, identities,
//! and the validation rules that guard them.
//!
//! This crate contains no I/O and no storage. It is plain data plus the
//! rules for changing it.
//!
//! ## Key Types
//!
//! - [`Charity`] - An organization with an accumulated fund and donor list
//! - [`Donation`] - An immutable record of one contribution
//! - [`CharityId`], [`DonationId`] - Opaque record identifiers
//! - [`Identity`] - Host-supplied caller token
//! - [`Clock`], [`IdGenerator`] - External collaborators

pub mod charity;
pub mod donation;
pub mod env;
pub mod error;
pub mod types;
pub mod validation;

pub use charity::{Charity, CharityPayload};
pub use donation::{Donation, DonationPayload};
pub use env::{Clock, IdGenerator, ManualClock, SequentialIds, SystemClock, UuidGenerator};
pub use error::ValidationError;
pub use types::{Amount, CharityId, DonationId, Identity, Timestamp};
pub use validation::{
    validate_amount, validate_charity_payload, validate_id, DEFAULT_MAX_FIELD_LEN,
};
