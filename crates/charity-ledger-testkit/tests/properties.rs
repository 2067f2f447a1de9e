//! Property tests over random donation plans and ledger workloads.

use proptest::prelude::*;

use charity_ledger::{CharityId, DonationPayload, ErrorKind, Identity};
use charity_ledger_testkit::generators::{
    charity_payload, identity, invalid_charity_payload, ledger_op, non_positive_amount,
};
use charity_ledger_testkit::{red_cross, DonationPlan, LedgerOp, TestFixture};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fund_is_sum_of_donations(plan: DonationPlan) {
        let fixture = TestFixture::new();
        let charity = fixture.ledger.create_charity(plan.payload.clone()).unwrap();

        for (donor, amount) in &plan.donations {
            fixture
                .ledger
                .donate_to_charity(donor, DonationPayload::new(charity.id.clone(), *amount))
                .unwrap();
        }

        prop_assert_eq!(fixture.ledger.get_charity_funds(&charity.id).unwrap(), plan.total());

        let expected: Vec<Identity> = plan.donations.iter().map(|(d, _)| d.clone()).collect();
        prop_assert_eq!(fixture.ledger.get_charity_donors(&charity.id).unwrap(), expected);

        let recorded: Vec<(Identity, i64)> = fixture
            .ledger
            .get_donations_for_charity(&charity.id)
            .unwrap()
            .into_iter()
            .map(|d| (d.donor, d.amount))
            .collect();
        prop_assert_eq!(recorded, plan.donations);
    }

    #[test]
    fn non_positive_amounts_change_nothing(
        amount in non_positive_amount(),
        donor in identity(),
    ) {
        let fixture = TestFixture::new();
        let charity = fixture.ledger.create_charity(red_cross()).unwrap();

        let err = fixture
            .ledger
            .donate_to_charity(&donor, DonationPayload::new(charity.id.clone(), amount))
            .unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Validation);
        prop_assert_eq!(fixture.ledger.get_charity(&charity.id).unwrap(), charity.clone());
        prop_assert!(fixture.ledger.get_donations_for_charity(&charity.id).unwrap().is_empty());
        prop_assert!(!fixture.ledger.has_donated_to_charity(&charity.id, &donor).unwrap());
    }

    #[test]
    fn invalid_payloads_are_never_stored(payload in invalid_charity_payload()) {
        let fixture = TestFixture::new();

        let err = fixture.ledger.create_charity(payload).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Validation);
        prop_assert_eq!(fixture.ledger.get_total_charities_count().unwrap(), 0);
    }

    #[test]
    fn invalid_updates_change_nothing(payload in invalid_charity_payload()) {
        let fixture = TestFixture::new();
        let charity = fixture.ledger.create_charity(red_cross()).unwrap();
        fixture.tick();

        let err = fixture.ledger.update_charity(&charity.id, payload).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Validation);
        prop_assert_eq!(fixture.ledger.get_charity(&charity.id).unwrap(), charity.clone());
        prop_assert_eq!(fixture.ledger.get_last_charity_update_timestamp(&charity.id).unwrap(), None);
    }

    #[test]
    fn created_charities_round_trip(payload in charity_payload()) {
        let fixture = TestFixture::new();
        let created = fixture.ledger.create_charity(payload.clone()).unwrap();
        let loaded = fixture.ledger.get_charity(&created.id).unwrap();

        prop_assert_eq!(loaded.payload(), payload);
        prop_assert_eq!(loaded.fund_available, 0);
        prop_assert!(loaded.donors.is_empty());
        prop_assert_eq!(loaded.updated_at, None);
    }

    #[test]
    fn workload_keeps_funds_consistent(ops in prop::collection::vec(ledger_op(), 1..48)) {
        let fixture = TestFixture::new();
        let mut created: Vec<CharityId> = Vec::new();

        for op in ops {
            match op {
                LedgerOp::Create(payload) => {
                    if let Ok(charity) = fixture.ledger.create_charity(payload) {
                        created.push(charity.id);
                    }
                }
                LedgerOp::Update(i, payload) => {
                    if let Some(id) = pick(&created, i) {
                        let _ = fixture.ledger.update_charity(id, payload);
                    }
                }
                LedgerOp::Delete(i) => {
                    if let Some(id) = pick(&created, i) {
                        let _ = fixture.ledger.delete_charity(id);
                    }
                }
                LedgerOp::Donate(i, donor, amount) => {
                    if let Some(id) = pick(&created, i) {
                        let _ = fixture
                            .ledger
                            .donate_to_charity(&donor, DonationPayload::new(id.clone(), amount));
                    }
                }
            }
            fixture.tick();
        }

        let live = fixture.ledger.get_all_charities().unwrap();
        prop_assert_eq!(fixture.ledger.get_total_charities_count().unwrap(), live.len());

        for charity in live {
            let donations = fixture.ledger.get_donations_for_charity(&charity.id).unwrap();
            let total: i64 = donations.iter().map(|d| d.amount).sum();
            let donors: Vec<Identity> = donations.into_iter().map(|d| d.donor).collect();

            prop_assert_eq!(charity.fund_available, total);
            prop_assert_eq!(charity.donors, donors);
        }
    }
}

fn pick(created: &[CharityId], index: usize) -> Option<&CharityId> {
    if created.is_empty() {
        None
    } else {
        created.get(index % created.len())
    }
}
