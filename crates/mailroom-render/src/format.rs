//! Money, rule and table-cell formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// How a table cell is aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Left-aligned, one trailing space.
    Text,
    /// Right-aligned, one leading and one trailing space.
    Integer,
    /// Right-aligned with room for the `$`, one trailing space.
    Money,
}

/// Render an amount with thousands separators and exactly two decimals,
/// without a currency sign: `1234.5` becomes `1,234.50`.
///
/// Amounts are rounded half away from zero to cents.
pub fn format_decimal(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = rounded.abs().to_string();
    let (whole, frac) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = String::with_capacity(plain.len() + whole.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(frac);
    for _ in frac.len()..2 {
        out.push('0');
    }
    out
}

/// Render an amount for display: `$` plus [`format_decimal`], with a
/// trailing `.00` dropped so whole dollars read `$1,235`.
///
/// The rendered text has exactly one `.`, followed by two digits, so
/// stripping the suffix is the same as removing every `.00`.
///
/// ```
/// use mailroom_render::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(12345, 1)), "$1,234.50");
/// assert_eq!(format_money(Decimal::new(123500, 2)), "$1,235");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let text = format!("${}", format_decimal(amount));
    match text.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// A rule of `length` dashes.
pub fn horizontal_rule(length: usize) -> String {
    "-".repeat(length)
}

/// Pad `value` to fill a column `width` characters wide.
///
/// Values longer than the column are never truncated.
pub fn pad_cell(value: &str, width: usize, kind: CellKind) -> String {
    match kind {
        CellKind::Text => format!("{value:<width$} "),
        CellKind::Integer => format!(" {value:>width$} "),
        CellKind::Money => format!("{value:>w$} ", w = width + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn decimal_grouping() {
        assert_eq!(format_decimal(dec!(0)), "0.00");
        assert_eq!(format_decimal(dec!(999.9)), "999.90");
        assert_eq!(format_decimal(dec!(1234.5)), "1,234.50");
        assert_eq!(format_decimal(dec!(200000)), "200,000.00");
        assert_eq!(format_decimal(dec!(1234567.891)), "1,234,567.89");
    }

    #[test]
    fn decimal_rounds_half_away_from_zero() {
        assert_eq!(format_decimal(dec!(0.005)), "0.01");
        assert_eq!(format_decimal(dec!(2.675)), "2.68");
    }

    #[test]
    fn money_examples() {
        assert_eq!(format_money(dec!(0)), "$0");
        assert_eq!(format_money(dec!(1234.5)), "$1,234.50");
        assert_eq!(format_money(dec!(1235.00)), "$1,235");
        assert_eq!(format_money(dec!(2.81)), "$2.81");
        assert_eq!(format_money(dec!(0.54)), "$0.54");
        assert_eq!(format_money(dec!(100000)), "$100,000");
    }

    #[test]
    fn money_keeps_nonzero_cents() {
        assert_eq!(format_money(dec!(10.10)), "$10.10");
        assert_eq!(format_money(dec!(0.001)), "$0");
    }

    #[test]
    fn money_only_drops_whole_cent_suffix() {
        assert_eq!(format_money(dec!(100.05)), "$100.05");
        assert_eq!(format_money(dec!(1000.50)), "$1,000.50");
        assert_eq!(format_money(dec!(1000.00)), "$1,000");
    }

    #[test]
    fn money_negative() {
        assert_eq!(format_money(dec!(-5)), "$-5");
        assert_eq!(format_money(dec!(-1234.5)), "$-1,234.50");
    }

    #[test]
    fn rule() {
        assert_eq!(horizontal_rule(0), "");
        assert_eq!(horizontal_rule(5), "-----");
    }

    #[test]
    fn cells() {
        assert_eq!(pad_cell("Dad", 6, CellKind::Text), "Dad    ");
        assert_eq!(pad_cell("2", 4, CellKind::Integer), "    2 ");
        assert_eq!(pad_cell("$25", 5, CellKind::Money), "   $25 ");
    }

    #[test]
    fn cells_never_truncate() {
        assert_eq!(pad_cell("Benedict", 3, CellKind::Text), "Benedict ");
        assert_eq!(pad_cell("12345", 2, CellKind::Integer), " 12345 ");
    }
}
