//! Donation: an immutable record of a single contribution.

use serde::{Deserialize, Serialize};

use crate::types::{Amount, CharityId, DonationId, Identity, Timestamp};

/// Request body for a donation. The donor comes from the caller identity,
/// never from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationPayload {
    pub charity_id: CharityId,
    pub amount: Amount,
}

impl DonationPayload {
    pub fn new(charity_id: impl Into<CharityId>, amount: Amount) -> Self {
        Self {
            charity_id: charity_id.into(),
            amount,
        }
    }
}

/// A stored donation record.
///
/// `charity_id` referenced an existing charity when the donation was made,
/// but may dangle after that charity is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: DonationId,
    pub charity_id: CharityId,
    pub amount: Amount,
    pub donor: Identity,
    pub created_at: Timestamp,
}

impl Donation {
    pub fn new(
        id: DonationId,
        charity_id: CharityId,
        amount: Amount,
        donor: Identity,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            charity_id,
            amount,
            donor,
            created_at,
        }
    }
}
