//! Plain-text rendering for the mailroom.
//!
//! Everything here is a pure function of its inputs:
//! - [`format`] renders money, horizontal rules and padded table cells
//! - [`letter`] composes thank-you letters from a [`LetterTemplate`]
//! - [`report`] builds the aligned donor summary table

pub mod format;
pub mod letter;
pub mod report;

pub use format::{format_decimal, format_money, horizontal_rule, pad_cell, CellKind};
pub use letter::{compose_letter, LetterTemplate};
pub use report::{build_report, report_rows, ReportRow, HEADERS};
