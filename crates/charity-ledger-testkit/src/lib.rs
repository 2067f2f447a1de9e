//! # Charity Ledger Testkit
//!
//! Testing utilities for the Charity Ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Deterministic ledgers and services for test scenarios
//! - **Generators**: Proptest strategies for payloads, amounts, identities and workloads
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use charity_ledger_testkit::{DonationPlan, TestFixture};
//!
//! proptest! {
//!     #[test]
//!     fn fund_is_sum_of_donations(plan: DonationPlan) {
//!         let fixture = TestFixture::new();
//!         let charity = fixture.ledger.create_charity(plan.payload.clone()).unwrap();
//!         // donate every (identity, amount) in plan.donations ...
//!         prop_assert_eq!(fixture.ledger.get_charity_funds(&charity.id).unwrap(), plan.total());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use charity_ledger_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let charity = fixture.create("Red Cross", "NY").unwrap();
//! assert_eq!(charity.fund_available, 0);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{
    charity_payload, init_tracing, memory_service, red_cross, MemoryService, TestFixture, START,
};
pub use generators::{DonationPlan, LedgerOp};
