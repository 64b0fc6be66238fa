//! The donor summary report.
//!
//! One row per donor with total given, number of gifts and average gift,
//! largest total first. Column widths are measured against the two-decimal
//! form of every amount (`1,234.00`) even though cells display the shorter
//! [`format_money`] form, so whole-dollar and cents rows stay aligned.

use mailroom_ledger::{Decimal, DonorEntry, Ledger};

use crate::format::{format_decimal, format_money, horizontal_rule, pad_cell, CellKind};

/// Column labels, left to right.
pub const HEADERS: [&str; 4] = ["Donor Name", "Total Given", "Num Gifts", "Average Gift"];

const KINDS: [CellKind; 4] = [CellKind::Text, CellKind::Money, CellKind::Integer, CellKind::Money];

/// One donor's line in the report. Derived from the ledger on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
}

impl From<&DonorEntry> for ReportRow {
    fn from(entry: &DonorEntry) -> Self {
        Self {
            name: entry.name().to_string(),
            total: entry.total(),
            count: entry.count(),
            average: entry.average(),
        }
    }
}

impl ReportRow {
    // Text used to size each column.
    fn measured(&self) -> [String; 4] {
        [
            self.name.clone(),
            format_decimal(self.total),
            self.count.to_string(),
            format_decimal(self.average),
        ]
    }

    // Text shown in each column.
    fn displayed(&self) -> [String; 4] {
        [
            self.name.clone(),
            format_money(self.total),
            self.count.to_string(),
            format_money(self.average),
        ]
    }
}

/// Rows for every donor, largest total first.
///
/// The sort is stable: donors with equal totals keep the order in which
/// they first gave.
pub fn report_rows(ledger: &Ledger) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = ledger.entries().iter().map(ReportRow::from).collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

fn column_widths(rows: &[ReportRow]) -> [usize; 4] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.measured()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

/// Build the aligned report table: header, rule, then one line per donor.
///
/// Lines carry no trailing whitespace. The rule spans every column plus
/// two spaces per column and one more.
pub fn build_report(ledger: &Ledger) -> String {
    let rows = report_rows(ledger);
    let widths = column_widths(&rows);

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(label, width)| pad_cell(label, width, CellKind::Text))
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header.join("| ").trim_end().to_string());
    lines.push(horizontal_rule(widths.iter().sum::<usize>() + widths.len() * 2 + 1));

    for row in &rows {
        let cells: Vec<String> = row
            .displayed()
            .iter()
            .zip(widths.iter().zip(KINDS))
            .map(|(value, (&width, kind))| pad_cell(value, width, kind))
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    tracing::debug!(donors = rows.len(), "built donor report");
    lines.join("\n")
}
