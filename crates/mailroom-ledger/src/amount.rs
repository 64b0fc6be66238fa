//! Donation amount parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::AmountError;

/// Parse a donation amount typed at the console.
///
/// Surrounding whitespace and a single leading `$` are ignored. Plain
/// decimals (`50`, `12.34`) and scientific notation (`1e3`) are accepted.
/// Negative amounts are rejected.
///
/// # Examples
///
/// ```
/// use mailroom_ledger::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("$50").unwrap(), Decimal::from(50));
/// assert!(parse_amount("fifty").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    if digits.is_empty() {
        return Err(AmountError::Empty);
    }

    let amount = Decimal::from_str(digits)
        .or_else(|_| Decimal::from_scientific(digits))
        .map_err(|_| AmountError::Invalid {
            input: input.trim().to_string(),
        })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountError::Negative {
            input: input.trim().to_string(),
        });
    }
    Ok(amount)
}
