//! The in-memory donor ledger.
//!
//! [`Ledger`] maps canonical donor names to the ordered list of donations
//! each donor has made. It is append-only: donors are created by their
//! first donation and neither donors nor donations are ever removed, so
//! every donor always has at least one donation.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{LedgerError, Result};
use crate::names::canonicalize_name;

/// A donor and every donation they have made, oldest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonorEntry {
    name: String,
    donations: Vec<Decimal>,
}

impl DonorEntry {
    /// The donor's canonical display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Donations in the order they were recorded. Never empty.
    pub fn donations(&self) -> &[Decimal] {
        &self.donations
    }

    /// Sum of all donations. [`Ledger::add_donation`] keeps this within
    /// `Decimal` range.
    pub fn total(&self) -> Decimal {
        self.donations.iter().sum()
    }

    /// Number of donations.
    pub fn count(&self) -> usize {
        self.donations.len()
    }

    /// Mean donation rounded half away from zero to cents.
    pub fn average(&self) -> Decimal {
        (self.total() / Decimal::from(self.count()))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Append-only store of donors and their donations.
///
/// Entries are kept in first-donation order; lookups go through a name
/// index. All lookups canonicalize the queried name first.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    entries: Vec<DonorEntry>,
    index: HashMap<String, usize>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a donation, creating the donor on first mention.
    ///
    /// Returns the canonical name the donation was filed under. A gift that
    /// would push the donor's total past [`Decimal::MAX`] is rejected and
    /// leaves the ledger unchanged.
    pub fn add_donation(&mut self, name: &str, amount: Decimal) -> Result<String> {
        let canonical = canonicalize_name(name);
        if canonical.is_empty() {
            return Err(LedgerError::InvalidName {
                name: name.to_string(),
            });
        }
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(LedgerError::NegativeAmount { amount });
        }

        match self.index.get(&canonical) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                if entry.total().checked_add(amount).is_none() {
                    return Err(LedgerError::AmountTooLarge {
                        name: canonical,
                        amount,
                    });
                }
                entry.donations.push(amount);
            }
            None => {
                self.index.insert(canonical.clone(), self.entries.len());
                self.entries.push(DonorEntry {
                    name: canonical.clone(),
                    donations: vec![amount],
                });
            }
        }
        debug!(donor = %canonical, %amount, "recorded donation");
        Ok(canonical)
    }

    /// Names of every known donor.
    ///
    /// The order is unspecified; use [`Ledger::sorted_donors`] when order
    /// matters.
    pub fn donors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Names of every known donor in alphabetical order.
    pub fn sorted_donors(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.donors().collect();
        names.sort_unstable();
        names
    }

    /// Every donor entry in first-donation order.
    pub fn entries(&self) -> &[DonorEntry] {
        &self.entries
    }

    /// Look up a donor by name.
    pub fn entry(&self, name: &str) -> Result<&DonorEntry> {
        let canonical = canonicalize_name(name);
        self.index
            .get(&canonical)
            .map(|&slot| &self.entries[slot])
            .ok_or(LedgerError::DonorNotFound { name: canonical })
    }

    /// Donations recorded for a donor, oldest first.
    pub fn donations_for(&self, name: &str) -> Result<&[Decimal]> {
        self.entry(name).map(DonorEntry::donations)
    }

    /// Total given by a donor.
    pub fn total(&self, name: &str) -> Result<Decimal> {
        self.entry(name).map(DonorEntry::total)
    }

    /// Number of gifts a donor has made.
    pub fn count(&self, name: &str) -> Result<usize> {
        self.entry(name).map(DonorEntry::count)
    }

    /// Average gift of a donor, rounded half away from zero to cents.
    pub fn average(&self, name: &str) -> Result<Decimal> {
        self.entry(name).map(DonorEntry::average)
    }

    /// Returns `true` if the donor has given at least once.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&canonicalize_name(name))
    }

    /// Number of donors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no donor has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
