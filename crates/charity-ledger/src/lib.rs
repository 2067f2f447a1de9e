//! # Charity Ledger
//!
//! A persistent record store for charities and the donations made to them.
//!
//! ## Overview
//!
//! The ledger is layered leaf-first:
//!
//! - **Store**: ordered key-value collections (`charity_ledger_store`)
//! - **Repositories**: [`CharityRepository`] and [`DonationRepository`], each
//!   the sole owner of one collection
//! - **Service**: [`DonationService`], the only place both collections meet
//! - **Facade**: [`Ledger`], the full operation set behind one lock
//!
//! ## Key Concepts
//!
//! - **Charity**: Name unique at creation. Fund only grows, donors only append.
//! - **Donation**: Immutable. Survives deletion of its charity.
//! - **Caller identity**: Opaque token from the host, recorded as the donor.
//!
//! ## Usage
//!
//! ```rust
//! use charity_ledger::{Ledger, LedgerConfig};
//! use charity_ledger::core::{CharityPayload, DonationPayload, Identity};
//!
//! let ledger = Ledger::open(LedgerConfig::memory()).unwrap();
//!
//! let charity = ledger
//!     .create_charity(CharityPayload::new("Red Cross", "Alice", "NY", "img1"))
//!     .unwrap();
//!
//! let caller = Identity::from("donor1");
//! ledger
//!     .donate_to_charity(&caller, DonationPayload::new(charity.id.clone(), 50))
//!     .unwrap();
//!
//! assert_eq!(ledger.get_charity_funds(&charity.id).unwrap(), 50);
//! ```
//!
//! ## Re-exports
//!
//! - `charity_ledger::core` - Records, ids, validation, clock and id sources
//! - `charity_ledger::store` - Storage abstraction and SQLite

pub mod charity_repository;
pub mod config;
pub mod donation_repository;
pub mod error;
pub mod ledger;
pub mod service;

// Re-export component crates
pub use charity_ledger_core as core;
pub use charity_ledger_store as store;

// Re-export main types for convenience
pub use charity_repository::CharityRepository;
pub use config::{LedgerConfig, StorageConfig};
pub use donation_repository::DonationRepository;
pub use error::{ErrorKind, LedgerError, Result};
pub use ledger::{DynStore, Ledger, CHARITIES, DONATIONS};
pub use service::DonationService;

// Re-export commonly used core types
pub use charity_ledger_core::{
    Amount, Charity, CharityId, CharityPayload, Donation, DonationId, DonationPayload, Identity,
    Timestamp,
};
