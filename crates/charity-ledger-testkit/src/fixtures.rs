//! Test fixtures and helpers.
//!
//! Common setup code for integration tests. Everything here is
//! deterministic: a manual clock and sequential ids, so record ids sort in
//! creation order and timestamps only move when a test moves them.

use std::path::Path;
use std::sync::Arc;

use charity_ledger::{
    CharityRepository, DonationRepository, DonationService, Ledger, LedgerConfig, Result,
};
use charity_ledger_core::{
    Charity, CharityId, CharityPayload, Donation, DonationId, IdGenerator, ManualClock,
    SequentialIds, Timestamp,
};
use charity_ledger_store::MemoryStore;

/// Where every fixture clock starts: 2024-01-01T00:00:00Z in nanoseconds.
pub const START: Timestamp = Timestamp::from_nanos(1_704_067_200_000_000_000);

/// A donation service over in-memory stores.
pub type MemoryService =
    DonationService<MemoryStore<CharityId, Charity>, MemoryStore<DonationId, Donation>>;

/// A ledger with a hand-driven clock.
pub struct TestFixture {
    pub clock: Arc<ManualClock>,
    pub ledger: Ledger,
}

impl TestFixture {
    /// In-memory ledger.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::memory())
    }

    /// SQLite-backed ledger at `path`.
    pub fn sqlite(path: impl AsRef<Path>) -> Self {
        Self::with_config(LedgerConfig::sqlite(path.as_ref()))
    }

    fn with_config(config: LedgerConfig) -> Self {
        let clock = Arc::new(ManualClock::new(START));
        let ledger = Ledger::with_collaborators(config, clock.clone(), Arc::new(SequentialIds::new("id")))
            .expect("fixture ledger opens");
        Self { clock, ledger }
    }

    /// Create a charity with filler fields and the given name and location.
    pub fn create(&self, name: &str, location: &str) -> Result<Charity> {
        self.ledger.create_charity(charity_payload(name, location))
    }

    /// Advance the clock by one second.
    pub fn tick(&self) {
        self.clock.advance(1_000_000_000);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A donation service over fresh in-memory stores, sharing `clock`.
pub fn memory_service(clock: Arc<ManualClock>) -> MemoryService {
    let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIds::new("id"));
    DonationService::new(
        CharityRepository::new(MemoryStore::new(), clock.clone(), ids.clone()),
        DonationRepository::new(MemoryStore::new(), clock, ids),
    )
}

/// The payload from the Red Cross scenarios.
pub fn red_cross() -> CharityPayload {
    CharityPayload::new("Red Cross", "Alice", "NY", "img1")
}

/// A valid payload with filler member and logo.
pub fn charity_payload(name: &str, location: &str) -> CharityPayload {
    CharityPayload::new(name, "member", location, format!("{}.png", name))
}

/// Install a test-writer tracing subscriber. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}
