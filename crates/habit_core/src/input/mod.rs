//! Operator input validation and sanitization.
//!
//! # Responsibility
//! - Turn raw operator text into typed, constraint-satisfying values.
//! - Drive re-prompt loops over an abstract [`Prompter`].
//! - Apply one cancellation protocol (the `E` sentinel) to every flow.
//!
//! # Invariants
//! - Retry loops never give up on their own; only the sentinel or end of
//!   input leaves a loop without a value.
//! - A cancelled flow yields [`Prompted::Cancelled`], never partial data.

mod parse;
mod prompt;

pub use parse::{
    is_exit, parse_date, parse_date_with_layout, parse_edit_field, parse_entry_id,
    parse_positive_int, DateLayout, EditField, FieldSelection, EXIT_SENTINEL,
};
pub use prompt::{
    read_date, read_edit_field, read_entry_id, read_non_blank, read_quantity, require_non_blank,
    sanitize_date, sanitize_edit_field, sanitize_entry_id, sanitize_quantity,
};

/// Line-oriented operator I/O used by the retry loops.
pub trait Prompter {
    /// Shows one message line to the operator.
    fn say(&mut self, message: &str);
    /// Reads one line without its trailing newline; `None` on end of input.
    fn read_line(&mut self) -> Option<String>;
}

/// Result of a prompt flow that the operator may abandon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

impl<T> Prompted<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
