//! Donors the console starts with.

use rust_decimal::Decimal;

use crate::ledger::Ledger;

/// Seed donors and their gifts in cents, in insertion order.
pub const SEED_DONORS: &[(&str, &[i64])] = &[
    ("Benedict Cumberbatch", &[20_000_000]),
    ("Elon Musk", &[1_000_000, 15_000_000, 10_000_000]),
    ("Dad", &[2_000, 500]),
    ("Donald Trump", &[281]),
    ("Billy Neighbor", &[54, 1, 25]),
];

impl Ledger {
    /// A ledger preloaded with [`SEED_DONORS`].
    pub fn seeded() -> Self {
        let mut ledger = Self::new();
        for (name, gifts) in SEED_DONORS {
            for &cents in *gifts {
                // Seed names are canonical and amounts non-negative.
                if let Err(err) = ledger.add_donation(name, Decimal::new(cents, 2)) {
                    tracing::error!(%err, "skipping seed donation");
                }
            }
        }
        ledger
    }
}
