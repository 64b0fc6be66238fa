//! Donor ledger for the mailroom.
//!
//! This crate holds the only state the mailroom has. It provides:
//! - Donor name canonicalization (whitespace collapsing, title casing)
//! - Donation amount parsing from free-form console input
//! - The append-only, in-memory [`Ledger`] and its per-donor aggregates
//! - The fixed seed donor set the console starts with
//!
//! # Modules
//!
//! - [`error`] — Error types for ledger and amount operations
//! - [`names`] — Donor name canonicalization
//! - [`amount`] — Donation amount parsing
//! - [`ledger`] — The [`Ledger`] store
//! - [`seed`] — Seed donors loaded at startup

pub mod amount;
pub mod error;
pub mod ledger;
pub mod names;
pub mod seed;

pub use amount::parse_amount;
pub use error::{AmountError, LedgerError, Result};
pub use ledger::{DonorEntry, Ledger};
pub use names::canonicalize_name;
pub use rust_decimal::Decimal;
pub use seed::SEED_DONORS;
