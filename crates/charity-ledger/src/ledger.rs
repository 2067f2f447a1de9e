//! The Ledger: the operation set exposed to the outward dispatch layer.
//!
//! Every operation takes the ledger lock for its whole duration, so no two
//! operations interleave. That lock is what makes `donate_to_charity`
//! atomic: nobody can observe a charity whose fund has grown but whose
//! donation record does not exist yet.

use std::sync::{Arc, Mutex, MutexGuard};

use charity_ledger_core::{
    Amount, Charity, CharityId, CharityPayload, Clock, Donation, DonationId, DonationPayload,
    IdGenerator, Identity, SystemClock, Timestamp, UuidGenerator,
};
use charity_ledger_store::{MemoryStore, RecordStore, SqliteStore, StoreError};
use tracing::info;

use crate::charity_repository::CharityRepository;
use crate::config::{LedgerConfig, StorageConfig};
use crate::donation_repository::DonationRepository;
use crate::error::{LedgerError, Result};
use crate::service::DonationService;

/// Collection name for charities.
pub const CHARITIES: &str = "charities";

/// Collection name for donations.
pub const DONATIONS: &str = "donations";

/// A boxed record store, so one ledger type covers every backend.
pub type DynStore<K, V> = Box<dyn RecordStore<K, V>>;

type Service = DonationService<DynStore<CharityId, Charity>, DynStore<DonationId, Donation>>;

/// The main Ledger struct.
///
/// Provides a unified API for:
/// - Creating, reading, updating and deleting charities
/// - Donating to charities
/// - Reading funds, donors and donation history
pub struct Ledger {
    service: Mutex<Service>,
}

impl Ledger {
    /// Open a ledger using the system clock and random UUIDs.
    pub fn open(config: LedgerConfig) -> Result<Self> {
        Self::with_collaborators(config, Arc::new(SystemClock::new()), Arc::new(UuidGenerator))
    }

    /// Open a ledger with explicit time and id sources.
    pub fn with_collaborators(
        config: LedgerConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self> {
        let (charities, donations) = open_stores(&config.storage)?;

        let service = DonationService::new(
            CharityRepository::new(charities, clock.clone(), ids.clone())
                .with_max_field_len(config.max_field_len),
            DonationRepository::new(donations, clock, ids),
        );

        info!(storage = ?config.storage, "ledger opened");
        Ok(Self {
            service: Mutex::new(service),
        })
    }

    fn service(&self) -> Result<MutexGuard<'_, Service>> {
        self.service
            .lock()
            .map_err(|e| LedgerError::from(StoreError::Poisoned(e.to_string())))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Charity Operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn create_charity(&self, payload: CharityPayload) -> Result<Charity> {
        self.service()?.charities_mut().create(payload)
    }

    pub fn get_charity(&self, id: &CharityId) -> Result<Charity> {
        self.service()?.charities().get(id)
    }

    pub fn get_all_charities(&self) -> Result<Vec<Charity>> {
        self.service()?.charities().list()
    }

    pub fn update_charity(&self, id: &CharityId, payload: CharityPayload) -> Result<Charity> {
        self.service()?.charities_mut().update(id, payload)
    }

    pub fn delete_charity(&self, id: &CharityId) -> Result<Charity> {
        self.service()?.charities_mut().delete(id)
    }

    pub fn get_charities_by_location(&self, location: &str) -> Result<Vec<Charity>> {
        self.service()?.charities().filter_by_location(location)
    }

    pub fn get_total_charities_count(&self) -> Result<usize> {
        self.service()?.count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Donation Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Donate on behalf of `caller`, who becomes the recorded donor.
    pub fn donate_to_charity(&self, caller: &Identity, payload: DonationPayload) -> Result<Charity> {
        self.service()?
            .donate(&payload.charity_id, payload.amount, caller.clone())
    }

    pub fn get_donation(&self, id: &DonationId) -> Result<Donation> {
        self.service()?.donations().get(id)
    }

    pub fn get_donations_for_charity(&self, charity_id: &CharityId) -> Result<Vec<Donation>> {
        self.service()?.donations_for_charity(charity_id)
    }

    pub fn get_charity_funds(&self, charity_id: &CharityId) -> Result<Amount> {
        self.service()?.total_funds(charity_id)
    }

    pub fn has_donated_to_charity(&self, charity_id: &CharityId, identity: &Identity) -> Result<bool> {
        self.service()?.has_donated(charity_id, identity)
    }

    pub fn get_charity_donors(&self, charity_id: &CharityId) -> Result<Vec<Identity>> {
        self.service()?.donors_of(charity_id)
    }

    /// `None` means the charity has never been modified since creation.
    pub fn get_last_charity_update_timestamp(&self, charity_id: &CharityId) -> Result<Option<Timestamp>> {
        self.service()?.last_update_timestamp(charity_id)
    }
}

/// Build the charity and donation stores for a storage backend.
fn open_stores(
    storage: &StorageConfig,
) -> Result<(DynStore<CharityId, Charity>, DynStore<DonationId, Donation>)> {
    match storage {
        StorageConfig::Memory => {
            let charities: DynStore<CharityId, Charity> =
                Box::new(MemoryStore::<CharityId, Charity>::new());
            let donations: DynStore<DonationId, Donation> =
                Box::new(MemoryStore::<DonationId, Donation>::new());
            Ok((charities, donations))
        }
        StorageConfig::Sqlite { path } => {
            let db = SqliteStore::open(path)?;
            let charities: DynStore<CharityId, Charity> =
                Box::new(db.collection::<CharityId, Charity>(CHARITIES));
            let donations: DynStore<DonationId, Donation> =
                Box::new(db.collection::<DonationId, Donation>(DONATIONS));
            Ok((charities, donations))
        }
    }
}
