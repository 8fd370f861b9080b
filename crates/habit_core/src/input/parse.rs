//! Pure parsers for operator text. No I/O happens here.

use crate::model::entry::EntryId;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Case-insensitive input that abandons the current operation.
pub const EXIT_SENTINEL: &str = "e";

// Both accepted layouts share this shape; chrono alone would also accept
// single-digit fields.
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("valid date shape regex"));

/// Accepted operator date layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    MonthDayYear,
    DayMonthYear,
}

impl DateLayout {
    const ORDERED: [DateLayout; 2] = [DateLayout::MonthDayYear, DateLayout::DayMonthYear];

    fn format(self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m-%d-%Y",
            Self::DayMonthYear => "%d-%m-%Y",
        }
    }
}

/// Entry field chosen in the edit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Date,
    Name,
    Quantity,
    Units,
}

/// Parsed edit-menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSelection {
    Field(EditField),
    Exit,
}

/// Returns whether `raw` is the cancellation sentinel.
pub fn is_exit(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

/// Parses `MM-DD-YYYY` or `DD-MM-YYYY`.
///
/// Layouts are tried in that order and the first match wins, so `03-04-2024`
/// is always March 4th even if the operator meant April 3rd. `13-04-2024`
/// only fits the second layout and is April 13th.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_date_with_layout(raw).map(|(date, _)| date)
}

/// Like [`parse_date`], also reporting which layout matched.
pub fn parse_date_with_layout(raw: &str) -> Option<(NaiveDate, DateLayout)> {
    let trimmed = raw.trim();
    if !DATE_SHAPE_RE.is_match(trimmed) {
        return None;
    }

    DateLayout::ORDERED.into_iter().find_map(|layout| {
        NaiveDate::parse_from_str(trimmed, layout.format())
            .ok()
            .map(|date| (date, layout))
    })
}

/// Parses operator text as an entry id. Surrounding whitespace is ignored.
pub fn parse_entry_id(raw: &str) -> Option<EntryId> {
    raw.trim().parse::<EntryId>().ok()
}

/// Parses a base-10 integer strictly greater than zero.
pub fn parse_positive_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|value| *value > 0)
}

/// Parses one of `0`-`3` or the sentinel. Anything longer than one
/// character is rejected.
pub fn parse_edit_field(raw: &str) -> Option<FieldSelection> {
    match raw.trim() {
        "0" => Some(FieldSelection::Field(EditField::Date)),
        "1" => Some(FieldSelection::Field(EditField::Name)),
        "2" => Some(FieldSelection::Field(EditField::Quantity)),
        "3" => Some(FieldSelection::Field(EditField::Units)),
        other if is_exit(other) => Some(FieldSelection::Exit),
        _ => None,
    }
}
