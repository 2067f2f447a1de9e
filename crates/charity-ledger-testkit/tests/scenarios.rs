//! End-to-end scenarios against the ledger facade.
//!
//! Each scenario runs against both the in-memory and the SQLite backend.

use charity_ledger::core::ValidationError;
use charity_ledger::{
    Charity, CharityId, CharityPayload, DonationPayload, ErrorKind, Identity, LedgerError,
};
use charity_ledger_testkit::{charity_payload, init_tracing, red_cross, TestFixture};

/// A memory fixture and a SQLite fixture. The temp dir must outlive its ledger.
fn backends() -> Vec<(TestFixture, Option<tempfile::TempDir>)> {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let sqlite = TestFixture::sqlite(dir.path().join("ledger.db"));
    vec![(TestFixture::new(), None), (sqlite, Some(dir))]
}

fn donate(
    fixture: &TestFixture,
    id: &CharityId,
    amount: i64,
    donor: &str,
) -> Result<Charity, LedgerError> {
    fixture
        .ledger
        .donate_to_charity(&Identity::from(donor), DonationPayload::new(id.clone(), amount))
}

#[test]
fn create_starts_with_empty_fund() {
    for (fixture, _dir) in backends() {
        let charity = fixture.ledger.create_charity(red_cross()).unwrap();

        assert_eq!(charity.name, "Red Cross");
        assert_eq!(charity.fund_available, 0);
        assert!(charity.donors.is_empty());
        assert_eq!(charity.updated_at, None);
    }
}

#[test]
fn duplicate_name_conflicts() {
    for (fixture, _dir) in backends() {
        fixture.ledger.create_charity(red_cross()).unwrap();

        let err = fixture.ledger.create_charity(red_cross()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let named: Vec<_> = fixture
            .ledger
            .get_all_charities()
            .unwrap()
            .into_iter()
            .filter(|c| c.name == "Red Cross")
            .collect();
        assert_eq!(named.len(), 1);
        assert_eq!(fixture.ledger.get_total_charities_count().unwrap(), 1);
    }
}

#[test]
fn repeat_donations_accumulate() {
    for (fixture, _dir) in backends() {
        let charity = fixture.ledger.create_charity(red_cross()).unwrap();

        donate(&fixture, &charity.id, 50, "donor1").unwrap();
        let after = donate(&fixture, &charity.id, 30, "donor1").unwrap();

        assert_eq!(after.fund_available, 80);
        assert_eq!(
            after.donors,
            vec![Identity::from("donor1"), Identity::from("donor1")]
        );

        let mut amounts: Vec<i64> = fixture
            .ledger
            .get_donations_for_charity(&charity.id)
            .unwrap()
            .into_iter()
            .map(|d| d.amount)
            .collect();
        amounts.sort_unstable();
        assert_eq!(amounts, vec![30, 50]);
    }
}

#[test]
fn negative_donation_rejected() {
    for (fixture, _dir) in backends() {
        let charity = fixture.ledger.create_charity(red_cross()).unwrap();

        let err = donate(&fixture, &charity.id, -5, "donor1").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::NonPositiveAmount(-5))
        ));

        assert_eq!(fixture.ledger.get_charity_funds(&charity.id).unwrap(), 0);
        assert!(fixture
            .ledger
            .get_donations_for_charity(&charity.id)
            .unwrap()
            .is_empty());
        assert_eq!(fixture.ledger.get_charity(&charity.id).unwrap(), charity);
    }
}

#[test]
fn delete_keeps_donations() {
    for (fixture, _dir) in backends() {
        let charity = fixture.ledger.create_charity(red_cross()).unwrap();
        donate(&fixture, &charity.id, 50, "donor1").unwrap();
        donate(&fixture, &charity.id, 30, "donor1").unwrap();

        let deleted = fixture.ledger.delete_charity(&charity.id).unwrap();
        assert_eq!(deleted.fund_available, 80);

        assert_eq!(
            fixture.ledger.get_donations_for_charity(&charity.id).unwrap().len(),
            2
        );
        assert!(fixture.ledger.get_charity(&charity.id).unwrap_err().is_not_found());
    }
}

#[test]
fn round_trip_preserves_input_fields() {
    for (fixture, _dir) in backends() {
        let payload = CharityPayload::new("Oxfam", "Bob", "London", "oxfam.png");
        let created = fixture.ledger.create_charity(payload.clone()).unwrap();
        let loaded = fixture.ledger.get_charity(&created.id).unwrap();

        assert_eq!(loaded, created);
        assert_eq!(loaded.payload(), payload);
    }
}

#[test]
fn missing_ids_are_not_found_without_side_effects() {
    for (fixture, _dir) in backends() {
        let existing = fixture.create("Existing", "NY").unwrap();
        let missing = CharityId::from("does-not-exist");

        assert!(fixture.ledger.get_charity(&missing).unwrap_err().is_not_found());
        assert!(fixture
            .ledger
            .update_charity(&missing, red_cross())
            .unwrap_err()
            .is_not_found());
        assert!(fixture.ledger.delete_charity(&missing).unwrap_err().is_not_found());
        assert!(donate(&fixture, &missing, 10, "donor1").unwrap_err().is_not_found());
        assert!(fixture.ledger.get_charity_funds(&missing).unwrap_err().is_not_found());
        assert!(fixture.ledger.get_charity_donors(&missing).unwrap_err().is_not_found());
        assert!(fixture
            .ledger
            .has_donated_to_charity(&missing, &Identity::from("donor1"))
            .unwrap_err()
            .is_not_found());
        assert!(fixture
            .ledger
            .get_last_charity_update_timestamp(&missing)
            .unwrap_err()
            .is_not_found());

        assert_eq!(fixture.ledger.get_all_charities().unwrap(), vec![existing]);
        assert!(fixture.ledger.get_donations_for_charity(&missing).unwrap().is_empty());
    }
}

#[test]
fn empty_id_is_a_validation_error() {
    for (fixture, _dir) in backends() {
        let empty = CharityId::from("");

        assert_eq!(
            fixture.ledger.get_charity(&empty).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            donate(&fixture, &empty, 10, "donor1").unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            fixture.ledger.get_charity_funds(&empty).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            fixture.ledger.get_charity_donors(&empty).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            fixture
                .ledger
                .has_donated_to_charity(&empty, &Identity::from("donor1"))
                .unwrap_err()
                .kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            fixture
                .ledger
                .get_last_charity_update_timestamp(&empty)
                .unwrap_err()
                .kind(),
            ErrorKind::Validation
        );
        assert!(fixture.ledger.delete_charity(&empty).unwrap_err().is_not_found());
    }
}

#[test]
fn update_stamps_timestamp_and_keeps_funds() {
    for (fixture, _dir) in backends() {
        let charity = fixture.create("Shelter", "NY").unwrap();
        assert_eq!(
            fixture.ledger.get_last_charity_update_timestamp(&charity.id).unwrap(),
            None
        );

        donate(&fixture, &charity.id, 12, "donor2").unwrap();
        fixture.tick();
        let updated = fixture
            .ledger
            .update_charity(&charity.id, charity_payload("Shelter", "LA"))
            .unwrap();

        assert_eq!(updated.fund_available, 12);
        assert_eq!(updated.donors, vec![Identity::from("donor2")]);
        assert_eq!(updated.created_at, charity.created_at);
        assert_eq!(
            fixture.ledger.get_last_charity_update_timestamp(&charity.id).unwrap(),
            updated.updated_at
        );
        assert!(updated.updated_at > Some(charity.created_at));
    }
}

#[test]
fn charities_by_location() {
    for (fixture, _dir) in backends() {
        fixture.create("A", "NY").unwrap();
        fixture.create("B", "LA").unwrap();
        fixture.create("C", "NY").unwrap();

        let ny: Vec<String> = fixture
            .ledger
            .get_charities_by_location("NY")
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(ny, vec!["A", "C"]);
        assert!(fixture.ledger.get_charities_by_location("Paris").unwrap().is_empty());
    }
}

#[test]
fn has_donated_tracks_each_caller() {
    for (fixture, _dir) in backends() {
        let charity = fixture.create("A", "NY").unwrap();
        donate(&fixture, &charity.id, 1, "alice").unwrap();

        assert!(fixture
            .ledger
            .has_donated_to_charity(&charity.id, &Identity::from("alice"))
            .unwrap());
        assert!(!fixture
            .ledger
            .has_donated_to_charity(&charity.id, &Identity::from("bob"))
            .unwrap());
    }
}
