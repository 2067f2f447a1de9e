//! Proptest generators for property-based testing.

use proptest::prelude::*;

use charity_ledger_core::{Amount, CharityPayload, Identity};

/// Generate a non-empty payload field.
pub fn field() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,23}".prop_map(String::from)
}

/// Generate a location from a small pool, so filters have matches.
pub fn location() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("NY".to_string()),
        Just("LA".to_string()),
        Just("London".to_string()),
        Just("Nairobi".to_string()),
    ]
}

/// Generate a valid charity payload.
pub fn charity_payload() -> impl Strategy<Value = CharityPayload> {
    (field(), field(), location(), field())
        .prop_map(|(name, member, location, logo)| CharityPayload::new(name, member, location, logo))
}

/// Generate a payload with at least one empty required field.
pub fn invalid_charity_payload() -> impl Strategy<Value = CharityPayload> {
    (charity_payload(), 0usize..4).prop_map(|(mut payload, blank)| {
        match blank {
            0 => payload.name.clear(),
            1 => payload.member.clear(),
            2 => payload.location.clear(),
            _ => payload.logo_image.clear(),
        }
        payload
    })
}

/// Generate a valid donation amount.
pub fn amount() -> impl Strategy<Value = Amount> {
    1i64..=1_000_000
}

/// Generate an amount that must be rejected.
pub fn non_positive_amount() -> impl Strategy<Value = Amount> {
    prop_oneof![Just(0i64), Just(Amount::MIN), Amount::MIN..0]
}

/// Generate a caller identity from a small pool, so repeats happen.
pub fn identity() -> impl Strategy<Value = Identity> {
    "donor[0-4]".prop_map(Identity::new)
}

/// One step of a random ledger workload.
///
/// Charity indices are taken modulo the number of charities created so far.
#[derive(Debug, Clone)]
pub enum LedgerOp {
    Create(CharityPayload),
    Update(usize, CharityPayload),
    Delete(usize),
    Donate(usize, Identity, Amount),
}

/// Generate a ledger operation, weighted towards donations.
pub fn ledger_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        2 => charity_payload().prop_map(LedgerOp::Create),
        1 => (any::<usize>(), charity_payload()).prop_map(|(i, p)| LedgerOp::Update(i, p)),
        1 => any::<usize>().prop_map(LedgerOp::Delete),
        5 => (any::<usize>(), identity(), amount()).prop_map(|(i, d, a)| LedgerOp::Donate(i, d, a)),
    ]
}

/// A charity plus a sequence of donations to it.
#[derive(Debug, Clone)]
pub struct DonationPlan {
    pub payload: CharityPayload,
    pub donations: Vec<(Identity, Amount)>,
}

impl DonationPlan {
    /// Sum of all planned amounts.
    pub fn total(&self) -> Amount {
        self.donations.iter().map(|(_, amount)| amount).sum()
    }
}

impl Arbitrary for DonationPlan {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            charity_payload(),
            prop::collection::vec((identity(), amount()), 0..32),
        )
            .prop_map(|(payload, donations)| DonationPlan { payload, donations })
            .boxed()
    }
}
