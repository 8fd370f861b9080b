//! Re-prompt loops built on the pure parsers.
//!
//! `sanitize_*` functions take a raw value already read by the caller and
//! keep asking until it is valid. `read_*` functions show a prompt first and
//! layer the sentinel check on the initial read.

use super::parse::{
    is_exit, parse_date, parse_edit_field, parse_entry_id, parse_positive_int, EditField,
    FieldSelection,
};
use super::{Prompted, Prompter};
use crate::model::entry::EntryId;
use chrono::NaiveDate;
use std::collections::HashSet;

const RETRY_MESSAGE: &str = "Invalid entry, please try again or type 'E' to exit";

/// Re-prompts until `raw` holds non-whitespace text.
///
/// Does not interpret the sentinel; `E` is returned as a value. `None` (end
/// of input) cancels.
pub fn require_non_blank(prompter: &mut dyn Prompter, raw: Option<String>) -> Prompted<String> {
    let mut current = raw;
    loop {
        match current.take() {
            Some(text) if !text.trim().is_empty() => {
                return Prompted::Value(text.trim().to_string());
            }
            Some(_) => {
                prompter.say(RETRY_MESSAGE);
                current = prompter.read_line();
            }
            None => return Prompted::Cancelled,
        }
    }
}

/// Shows `prompt`, reads non-blank text and cancels on the sentinel.
pub fn read_non_blank(prompter: &mut dyn Prompter, prompt: &str) -> Prompted<String> {
    prompter.say(prompt);
    let raw = prompter.read_line();
    match require_non_blank(prompter, raw) {
        Prompted::Value(text) if is_exit(&text) => Prompted::Cancelled,
        other => other,
    }
}

/// Re-prompts until `raw` parses as a date in either accepted layout.
pub fn sanitize_date(prompter: &mut dyn Prompter, raw: String) -> Prompted<NaiveDate> {
    let mut current = raw;
    loop {
        if is_exit(&current) {
            return Prompted::Cancelled;
        }
        if let Some(date) = parse_date(&current) {
            return Prompted::Value(date);
        }

        prompter.say("Unable to read that date.");
        prompter.say("Enter the date as MM-DD-YYYY or DD-MM-YYYY, or type 'E' to exit");
        let raw = prompter.read_line();
        current = match require_non_blank(prompter, raw) {
            Prompted::Value(text) => text,
            Prompted::Cancelled => return Prompted::Cancelled,
        };
    }
}

pub fn read_date(prompter: &mut dyn Prompter, prompt: &str) -> Prompted<NaiveDate> {
    match read_non_blank(prompter, prompt) {
        Prompted::Value(raw) => sanitize_date(prompter, raw),
        Prompted::Cancelled => Prompted::Cancelled,
    }
}

/// Re-prompts until `raw` is an integer greater than zero.
pub fn sanitize_quantity(prompter: &mut dyn Prompter, raw: String) -> Prompted<i64> {
    let mut current = raw;
    loop {
        if is_exit(&current) {
            return Prompted::Cancelled;
        }
        if let Some(quantity) = parse_positive_int(&current) {
            return Prompted::Value(quantity);
        }

        prompter.say("Invalid entry, please enter a whole number greater than zero or 'E' to exit");
        current = match prompter.read_line() {
            Some(text) => text,
            None => return Prompted::Cancelled,
        };
    }
}

pub fn read_quantity(prompter: &mut dyn Prompter, prompt: &str) -> Prompted<i64> {
    prompter.say(prompt);
    match prompter.read_line() {
        Some(raw) => sanitize_quantity(prompter, raw),
        None => Prompted::Cancelled,
    }
}

/// Re-prompts until `raw` is exactly one of `0`-`3` or the sentinel.
pub fn sanitize_edit_field(prompter: &mut dyn Prompter, raw: String) -> Prompted<EditField> {
    let mut current = raw;
    loop {
        match parse_edit_field(&current) {
            Some(FieldSelection::Field(field)) => return Prompted::Value(field),
            Some(FieldSelection::Exit) => return Prompted::Cancelled,
            None => {
                prompter.say(RETRY_MESSAGE);
                current = match prompter.read_line() {
                    Some(text) => text,
                    None => return Prompted::Cancelled,
                };
            }
        }
    }
}

pub fn read_edit_field(prompter: &mut dyn Prompter, prompt: &str) -> Prompted<EditField> {
    prompter.say(prompt);
    match prompter.read_line() {
        Some(raw) => sanitize_edit_field(prompter, raw),
        None => Prompted::Cancelled,
    }
}

/// Re-prompts until `raw` names one of `known_ids`.
pub fn sanitize_entry_id(
    prompter: &mut dyn Prompter,
    raw: String,
    known_ids: &HashSet<EntryId>,
) -> Prompted<EntryId> {
    let mut current = raw;
    loop {
        if is_exit(&current) {
            return Prompted::Cancelled;
        }
        if let Some(id) = parse_entry_id(&current).filter(|id| known_ids.contains(id)) {
            return Prompted::Value(id);
        }

        prompter.say(RETRY_MESSAGE);
        current = match prompter.read_line() {
            Some(text) => text,
            None => return Prompted::Cancelled,
        };
    }
}

pub fn read_entry_id(
    prompter: &mut dyn Prompter,
    prompt: &str,
    known_ids: &HashSet<EntryId>,
) -> Prompted<EntryId> {
    prompter.say(prompt);
    match prompter.read_line() {
        Some(raw) => sanitize_entry_id(prompter, raw, known_ids),
        None => Prompted::Cancelled,
    }
}
