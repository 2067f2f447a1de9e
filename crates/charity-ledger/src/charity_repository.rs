//! CharityRepository: sole owner of the charity collection.
//!
//! Enforces field presence on create and update, and name uniqueness on
//! create. Name uniqueness is not re-checked on update, so a
//! rename can collide with an existing charity.

use std::sync::Arc;

use charity_ledger_core::{
    validate_charity_payload, validate_id, Charity, CharityId, CharityPayload, Clock, IdGenerator,
    DEFAULT_MAX_FIELD_LEN,
};
use charity_ledger_store::{RecordStore, RecordStoreExt};
use tracing::{debug, info, warn};

use crate::error::{LedgerError, Result};

/// Repository over a `CharityId -> Charity` store.
pub struct CharityRepository<S> {
    store: S,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    max_field_len: usize,
}

impl<S: RecordStore<CharityId, Charity>> CharityRepository<S> {
    /// Create a repository over `store`.
    pub fn new(store: S, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            clock,
            ids,
            max_field_len: DEFAULT_MAX_FIELD_LEN,
        }
    }

    /// Override the per-field length limit.
    pub fn with_max_field_len(mut self, max_field_len: usize) -> Self {
        self.max_field_len = max_field_len;
        self
    }

    /// Create a charity from `payload`.
    ///
    /// Fails with `Validation` on an empty or oversized field and with
    /// `Conflict` if any stored charity already has this name.
    pub fn create(&mut self, payload: CharityPayload) -> Result<Charity> {
        validate_charity_payload(&payload, self.max_field_len)?;

        if self.store.find_value(|c| c.name == payload.name)?.is_some() {
            warn!(name = %payload.name, "rejected duplicate charity name");
            return Err(LedgerError::Conflict { name: payload.name });
        }

        let id = CharityId::new(self.ids.next_id());
        let charity = Charity::new(id.clone(), payload, self.clock.now());
        self.store.insert(id, charity.clone())?;

        info!(charity_id = %charity.id, name = %charity.name, "charity created");
        Ok(charity)
    }

    /// Get a charity by id.
    pub fn get(&self, id: &CharityId) -> Result<Charity> {
        validate_id(id.as_str())?;
        debug!(charity_id = %id, "get charity");
        self.store
            .get(id)?
            .ok_or_else(|| LedgerError::CharityNotFound(id.clone()))
    }

    /// All charities, in id order.
    pub fn list(&self) -> Result<Vec<Charity>> {
        Ok(self.store.values()?)
    }

    /// Replace the settable fields of an existing charity.
    ///
    /// Funds, donors, id and creation time are preserved; `updated_at` is
    /// stamped with the current time.
    pub fn update(&mut self, id: &CharityId, payload: CharityPayload) -> Result<Charity> {
        validate_id(id.as_str())?;
        validate_charity_payload(&payload, self.max_field_len)?;

        let mut charity = self
            .store
            .get(id)?
            .ok_or_else(|| LedgerError::CharityNotFound(id.clone()))?;

        charity.apply_update(payload, self.clock.now());
        self.store.insert(id.clone(), charity.clone())?;

        info!(charity_id = %id, "charity updated");
        Ok(charity)
    }

    /// Write back a charity whose managed fields were changed in memory.
    ///
    /// The record must still exist. `updated_at` is stamped here.
    pub fn save(&mut self, mut charity: Charity) -> Result<Charity> {
        if !self.store.contains_key(&charity.id)? {
            return Err(LedgerError::CharityNotFound(charity.id));
        }

        charity.updated_at = Some(self.clock.now());
        self.store.insert(charity.id.clone(), charity.clone())?;

        debug!(charity_id = %charity.id, fund = charity.fund_available, "charity saved");
        Ok(charity)
    }

    /// Remove a charity and return its last state.
    ///
    /// Donations that reference it are left in place.
    pub fn delete(&mut self, id: &CharityId) -> Result<Charity> {
        let charity = self
            .store
            .remove(id)?
            .ok_or_else(|| LedgerError::CharityNotFound(id.clone()))?;

        info!(charity_id = %id, "charity deleted");
        Ok(charity)
    }

    /// Charities whose location equals `location` exactly.
    pub fn filter_by_location(&self, location: &str) -> Result<Vec<Charity>> {
        Ok(self.store.filter_values(|c| c.location == location)?)
    }

    /// Number of stored charities.
    pub fn count(&self) -> Result<usize> {
        Ok(self.store.len()?)
    }
}
