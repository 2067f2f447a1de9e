//! Charity: an organization eligible to receive funds.
//!
//! Fields fall into two groups:
//! - settable through [`CharityPayload`]: `name`, `member`, `location`, `logo_image`
//! - managed by the ledger: `id`, `created_at`, `updated_at`, `fund_available`, `donors`
//!
//! [`Charity::apply_update`] is the only way payload fields reach an existing
//! record, and [`Charity::record_donation`] the only way funds change.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{Amount, CharityId, Identity, Timestamp};

/// Externally settable charity fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharityPayload {
    pub name: String,
    pub member: String,
    pub location: String,
    pub logo_image: String,
}

impl CharityPayload {
    /// Build a payload from its four fields.
    pub fn new(
        name: impl Into<String>,
        member: impl Into<String>,
        location: impl Into<String>,
        logo_image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            member: member.into(),
            location: location.into(),
            logo_image: logo_image.into(),
        }
    }

    /// Field names paired with their values, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", &self.name),
            ("member", &self.member),
            ("location", &self.location),
            ("logoImage", &self.logo_image),
        ]
    }
}

/// A stored charity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charity {
    pub id: CharityId,
    pub name: String,
    pub member: String,
    pub location: String,
    pub logo_image: String,
    pub fund_available: Amount,
    pub donors: Vec<Identity>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl Charity {
    /// Create a fresh record: no funds, no donors, never updated.
    pub fn new(id: CharityId, payload: CharityPayload, created_at: Timestamp) -> Self {
        Self {
            id,
            name: payload.name,
            member: payload.member,
            location: payload.location,
            logo_image: payload.logo_image,
            fund_available: 0,
            donors: Vec::new(),
            created_at,
            updated_at: None,
        }
    }

    /// Merge payload fields over this record and stamp `updated_at`.
    ///
    /// `id`, `created_at`, `fund_available` and `donors` are left untouched.
    pub fn apply_update(&mut self, payload: CharityPayload, now: Timestamp) {
        self.name = payload.name;
        self.member = payload.member;
        self.location = payload.location;
        self.logo_image = payload.logo_image;
        self.updated_at = Some(now);
    }

    /// Add `amount` to the fund and append `donor` to the donor list.
    ///
    /// Does not touch `updated_at`; the write-back that persists this change
    /// stamps it. On error the record is unchanged.
    pub fn record_donation(&mut self, amount: Amount, donor: Identity) -> Result<(), ValidationError> {
        if amount <= 0 {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        let fund = self
            .fund_available
            .checked_add(amount)
            .ok_or(ValidationError::FundOverflow {
                available: self.fund_available,
                amount,
            })?;
        self.fund_available = fund;
        self.donors.push(donor);
        Ok(())
    }

    /// True if `identity` appears anywhere in the donor list.
    pub fn has_donor(&self, identity: &Identity) -> bool {
        self.donors.contains(identity)
    }

    /// The settable fields of this record as a payload.
    pub fn payload(&self) -> CharityPayload {
        CharityPayload {
            name: self.name.clone(),
            member: self.member.clone(),
            location: self.location.clone(),
            logo_image: self.logo_image.clone(),
        }
    }
}
