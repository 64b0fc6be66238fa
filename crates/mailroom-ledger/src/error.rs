//! Error types for ledger operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No donor is recorded under this name.
    #[error("donor not found: {name}")]
    DonorNotFound { name: String },

    /// The name canonicalizes to nothing.
    #[error("invalid donor name: {name:?}")]
    InvalidName { name: String },

    /// Donations are non-negative.
    #[error("donation amount must not be negative: {amount}")]
    NegativeAmount { amount: Decimal },

    /// Adding the gift would overflow the donor's total.
    #[error("{amount} is too large to add to the total for {name}.")]
    AmountTooLarge { name: String, amount: Decimal },
}

/// Errors produced while parsing a donation amount typed at the console.
///
/// The display text is shown to the user verbatim before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Nothing was entered.
    #[error("an amount is required.")]
    Empty,

    /// The text is not a number.
    #[error("{input} is not a valid amount.")]
    Invalid { input: String },

    /// The text is a number below zero.
    #[error("{input} is not a valid amount.")]
    Negative { input: String },
}

/// Convenience type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
