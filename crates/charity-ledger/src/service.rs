//! DonationService: cross-collection orchestration.
//!
//! The two repositories never call each other. Anything that touches both
//! collections, or derives a value from a charity's donation state, goes
//! through here.

use charity_ledger_core::{
    validate_amount, validate_id, Amount, Charity, CharityId, Donation, DonationId, Identity,
    Timestamp,
};
use charity_ledger_store::RecordStore;
use tracing::{debug, error, info};

use crate::charity_repository::CharityRepository;
use crate::donation_repository::DonationRepository;
use crate::error::Result;

/// Orchestrates donations across the charity and donation repositories.
///
/// Mutating methods take `&mut self`. A service reachable from more than
/// one thread must sit behind a lock (see [`crate::Ledger`]) so that
/// `donate` is never interleaved with another operation.
pub struct DonationService<CS, DS> {
    charities: CharityRepository<CS>,
    donations: DonationRepository<DS>,
}

impl<CS, DS> DonationService<CS, DS>
where
    CS: RecordStore<CharityId, Charity>,
    DS: RecordStore<DonationId, Donation>,
{
    pub fn new(charities: CharityRepository<CS>, donations: DonationRepository<DS>) -> Self {
        Self {
            charities,
            donations,
        }
    }

    pub fn charities(&self) -> &CharityRepository<CS> {
        &self.charities
    }

    pub fn charities_mut(&mut self) -> &mut CharityRepository<CS> {
        &mut self.charities
    }

    pub fn donations(&self) -> &DonationRepository<DS> {
        &self.donations
    }

    /// Donate `amount` from `donor` to a charity.
    ///
    /// On success the charity's fund grows by `amount`, `donor` is appended
    /// to its donor list, the charity is written back (stamping
    /// `updated_at`), and a donation record is appended. Returns the
    /// updated charity.
    ///
    /// Fails with `Validation` for a non-positive amount or a fund overflow
    /// and with `NotFound` for an unknown charity; neither changes state.
    ///
    /// There is no rollback. If the charity write succeeds and the donation
    /// write then fails, the fund increase stays committed without a
    /// matching donation record, and the storage error is returned.
    pub fn donate(&mut self, charity_id: &CharityId, amount: Amount, donor: Identity) -> Result<Charity> {
        validate_id(charity_id.as_str())?;
        validate_amount(amount)?;

        let mut charity = self.charities.get(charity_id)?;
        charity.record_donation(amount, donor.clone())?;
        let charity = self.charities.save(charity)?;

        if let Err(e) = self.donations.create(charity.id.clone(), amount, donor) {
            error!(
                charity_id = %charity.id,
                amount,
                error = %e,
                "charity fund updated but donation record was not written"
            );
            return Err(e);
        }

        info!(charity_id = %charity.id, amount, fund = charity.fund_available, "donation applied");
        Ok(charity)
    }

    /// True if `identity` has donated to the charity at least once.
    pub fn has_donated(&self, charity_id: &CharityId, identity: &Identity) -> Result<bool> {
        Ok(self.charities.get(charity_id)?.has_donor(identity))
    }

    /// The charity's accumulated fund.
    pub fn total_funds(&self, charity_id: &CharityId) -> Result<Amount> {
        Ok(self.charities.get(charity_id)?.fund_available)
    }

    /// When the charity was last modified, or `None` if never.
    pub fn last_update_timestamp(&self, charity_id: &CharityId) -> Result<Option<Timestamp>> {
        Ok(self.charities.get(charity_id)?.updated_at)
    }

    /// Donor identities in donation order, duplicates included.
    pub fn donors_of(&self, charity_id: &CharityId) -> Result<Vec<Identity>> {
        Ok(self.charities.get(charity_id)?.donors)
    }

    /// Number of stored charities.
    pub fn count(&self) -> Result<usize> {
        self.charities.count()
    }

    /// Donations recorded for `charity_id`.
    ///
    /// Works for deleted charities: their donations are never removed.
    pub fn donations_for_charity(&self, charity_id: &CharityId) -> Result<Vec<Donation>> {
        let donations = self.donations.list_for_charity(charity_id)?;
        debug!(charity_id = %charity_id, count = donations.len(), "listed donations");
        Ok(donations)
    }
}
