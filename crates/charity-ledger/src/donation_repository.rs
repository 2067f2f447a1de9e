//! DonationRepository: append-only storage for donations.
//!
//! Does not check that the referenced charity exists; the service does
//! that before calling `create`.

use std::sync::Arc;

use charity_ledger_core::{
    validate_id, Amount, CharityId, Clock, Donation, DonationId, IdGenerator, Identity,
};
use charity_ledger_store::{RecordStore, RecordStoreExt};
use tracing::info;

use crate::error::{LedgerError, Result};

/// Repository over a `DonationId -> Donation` store.
pub struct DonationRepository<S> {
    store: S,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl<S: RecordStore<DonationId, Donation>> DonationRepository<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, clock, ids }
    }

    /// Append a donation record with a fresh id and the current time.
    pub fn create(&mut self, charity_id: CharityId, amount: Amount, donor: Identity) -> Result<Donation> {
        let id = DonationId::new(self.ids.next_id());
        let donation = Donation::new(id.clone(), charity_id, amount, donor, self.clock.now());
        self.store.insert(id, donation.clone())?;

        info!(
            donation_id = %donation.id,
            charity_id = %donation.charity_id,
            amount,
            "donation recorded"
        );
        Ok(donation)
    }

    pub fn get(&self, id: &DonationId) -> Result<Donation> {
        validate_id(id.as_str())?;
        self.store
            .get(id)?
            .ok_or_else(|| LedgerError::DonationNotFound(id.clone()))
    }

    /// Every donation made to `charity_id`, in donation id order.
    pub fn list_for_charity(&self, charity_id: &CharityId) -> Result<Vec<Donation>> {
        Ok(self.store.filter_values(|d| &d.charity_id == charity_id)?)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.store.len()?)
    }
}
