//! Entry domain model.
//!
//! # Responsibility
//! - Define `NewEntry` (pre-insert shape) and `Entry` (persisted shape).
//! - Validate quantity and text-field invariants before persistence.
//!
//! # Invariants
//! - `quantity` is strictly positive.
//! - `habit_name` and `units` are never empty or whitespace-only.
//! - `id` is assigned by the store and never changes afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier (SQLite `INTEGER PRIMARY KEY`).
pub type EntryId = i64;

/// `chrono` format string of the canonical persisted date form.
pub const CANONICAL_DATE_FORMAT: &str = "%m-%d-%Y";

/// Renders a date in canonical `MM-DD-YYYY` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Parses a date previously rendered by [`format_date`].
///
/// Only the canonical layout is accepted here; operator input goes through
/// `input::parse_date` instead.
pub fn parse_canonical_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, CANONICAL_DATE_FORMAT).ok()
}

/// Invariant violations for entry fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    BlankHabitName,
    BlankUnits,
    NonPositiveQuantity(i64),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankHabitName => write!(f, "habit_name must not be blank"),
            Self::BlankUnits => write!(f, "units must not be blank"),
            Self::NonPositiveQuantity(value) => {
                write!(f, "quantity must be greater than zero, got {value}")
            }
        }
    }
}

impl Error for EntryValidationError {}

/// Entry fields supplied by the caller before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    #[serde(with = "canonical_date")]
    pub date: NaiveDate,
    pub habit_name: String,
    pub quantity: i64,
    pub units: String,
}

impl NewEntry {
    /// Builds a validated entry draft.
    pub fn new(
        date: NaiveDate,
        habit_name: impl Into<String>,
        quantity: i64,
        units: impl Into<String>,
    ) -> Result<Self, EntryValidationError> {
        let draft = Self {
            date,
            habit_name: habit_name.into(),
            quantity,
            units: units.into(),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Checks field invariants without touching storage.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_fields(&self.habit_name, self.quantity, &self.units)
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: EntryId) -> Entry {
        Entry {
            id,
            date: self.date,
            habit_name: self.habit_name,
            quantity: self.quantity,
            units: self.units,
        }
    }
}

/// One persisted habit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(with = "canonical_date")]
    pub date: NaiveDate,
    pub habit_name: String,
    pub quantity: i64,
    pub units: String,
}

impl Entry {
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_fields(&self.habit_name, self.quantity, &self.units)
    }

    /// Returns the data fields without the id, e.g. to compare against the
    /// draft an entry was created from.
    pub fn to_new_entry(&self) -> NewEntry {
        NewEntry {
            date: self.date,
            habit_name: self.habit_name.clone(),
            quantity: self.quantity,
            units: self.units.clone(),
        }
    }
}

fn validate_fields(
    habit_name: &str,
    quantity: i64,
    units: &str,
) -> Result<(), EntryValidationError> {
    if habit_name.trim().is_empty() {
        return Err(EntryValidationError::BlankHabitName);
    }
    if units.trim().is_empty() {
        return Err(EntryValidationError::BlankUnits);
    }
    if quantity <= 0 {
        return Err(EntryValidationError::NonPositiveQuantity(quantity));
    }
    Ok(())
}

mod canonical_date {
    use super::{format_date, parse_canonical_date};
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_canonical_date(&text)
            .ok_or_else(|| D::Error::custom(format!("date `{text}` is not in MM-DD-YYYY form")))
    }
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_canonical_date, EntryValidationError, NewEntry};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn canonical_format_is_zero_padded_month_first() {
        assert_eq!(format_date(date(2023, 8, 1)), "08-01-2023");
        assert_eq!(parse_canonical_date("08-01-2023"), Some(date(2023, 8, 1)));
        assert_eq!(parse_canonical_date("2023-08-01"), None);
    }

    #[test]
    fn new_rejects_whitespace_only_text_fields() {
        let err = NewEntry::new(date(2023, 8, 1), "   ", 5, "minutes").unwrap_err();
        assert_eq!(err, EntryValidationError::BlankHabitName);

        let err = NewEntry::new(date(2023, 8, 1), "running", 5, "\t").unwrap_err();
        assert_eq!(err, EntryValidationError::BlankUnits);
    }

    #[test]
    fn new_rejects_zero_and_negative_quantity() {
        for quantity in [0, -3] {
            let err = NewEntry::new(date(2023, 8, 1), "running", quantity, "miles").unwrap_err();
            assert_eq!(err, EntryValidationError::NonPositiveQuantity(quantity));
        }
    }
}
