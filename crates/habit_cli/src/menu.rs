//! Main menu loop and the add/delete/edit flows.
//!
//! # Responsibility
//! - Render menus and dispatch one operation per selection.
//! - Turn validated input into store calls and report the outcome.
//!
//! # Invariants
//! - Bad operator input never ends the loop; only `0` or end of input does.
//! - Storage errors are reported and the loop returns to the main menu.

use habit_core::input::{
    read_date, read_edit_field, read_entry_id, read_non_blank, read_quantity, EditField,
};
use habit_core::{
    format_date, Entry, EntryId, EntryRepository, EntryService, NewEntry, Prompted, Prompter,
    RepoResult,
};
use log::debug;
use std::collections::HashSet;

const MAIN_MENU: &[&str] = &[
    "",
    "What do you want to do?",
    "",
    "Type 0 to Close Application",
    "Type 1 to View all Records",
    "Type 2 to Add a record",
    "Type 3 to Delete a record",
    "Type 4 to Edit a record",
];

const EDIT_MENU: &str = "What part of the entry would you like to edit?
\t0 - Date
\t1 - Habit name
\t2 - Quantity
\t3 - Units
or type 'E' to exit";

/// One main-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    List,
    Add,
    Delete,
    Edit,
}

impl MenuChoice {
    /// Maps the first non-blank character of `raw`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().chars().next()? {
            '0' => Some(Self::Exit),
            '1' => Some(Self::List),
            '2' => Some(Self::Add),
            '3' => Some(Self::Delete),
            '4' => Some(Self::Edit),
            _ => None,
        }
    }
}

/// Runs the menu until the operator exits or input ends.
pub fn run<R: EntryRepository>(service: &EntryService<R>, prompter: &mut dyn Prompter) {
    loop {
        for line in MAIN_MENU {
            prompter.say(line);
        }

        let Some(raw) = prompter.read_line() else {
            debug!("event=menu module=cli status=eof");
            return;
        };

        let result = match MenuChoice::parse(&raw) {
            Some(MenuChoice::Exit) => {
                prompter.say("Closing application");
                return;
            }
            Some(MenuChoice::List) => list_records(service, prompter).map(|_| ()),
            Some(MenuChoice::Add) => add_record(service, prompter),
            Some(MenuChoice::Delete) => delete_record(service, prompter),
            Some(MenuChoice::Edit) => edit_record(service, prompter),
            None => {
                prompter.say("Invalid selection, please try again");
                Ok(())
            }
        };

        if let Err(err) = result {
            prompter.say(&format!("Unable to complete the operation: {err}"));
        }
    }
}

/// Formats one entry as a fixed-width listing line.
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "Id: {:<4} Date: {:<12} HabitName: {:<20} Quantity: {:<10} Units: {}",
        entry.id,
        format_date(entry.date),
        entry.habit_name,
        entry.quantity,
        entry.units
    )
}

fn list_records<R: EntryRepository>(
    service: &EntryService<R>,
    prompter: &mut dyn Prompter,
) -> RepoResult<HashSet<EntryId>> {
    let entries = service.list_entries()?;
    if entries.is_empty() {
        prompter.say("No records found.");
    }
    for entry in &entries {
        prompter.say(&format_entry(entry));
    }
    Ok(entries.iter().map(|entry| entry.id).collect())
}

fn add_record<R: EntryRepository>(
    service: &EntryService<R>,
    prompter: &mut dyn Prompter,
) -> RepoResult<()> {
    let Prompted::Value(date) = read_date(
        prompter,
        "Enter the date completed (MM-DD-YYYY or DD-MM-YYYY), or type 'E' to exit",
    ) else {
        return cancelled(prompter);
    };
    let Prompted::Value(habit_name) =
        read_non_blank(prompter, "Enter the habit name, or type 'E' to exit")
    else {
        return cancelled(prompter);
    };
    let Prompted::Value(quantity) =
        read_quantity(prompter, "Enter the quantity completed, or type 'E' to exit")
    else {
        return cancelled(prompter);
    };
    let Prompted::Value(units) =
        read_non_blank(prompter, "Enter the units tracked, or type 'E' to exit")
    else {
        return cancelled(prompter);
    };

    let entry = NewEntry::new(date, habit_name, quantity, units)?;
    let id = service.add_entry(&entry)?;
    prompter.say(&format!("Record added with id {id}"));
    Ok(())
}

fn delete_record<R: EntryRepository>(
    service: &EntryService<R>,
    prompter: &mut dyn Prompter,
) -> RepoResult<()> {
    let known_ids = list_records(service, prompter)?;
    let Prompted::Value(id) = read_entry_id(
        prompter,
        "Enter the record ID to delete, or type 'E' to exit",
        &known_ids,
    ) else {
        return cancelled(prompter);
    };

    match service.delete_entry(id) {
        Ok(()) => prompter.say("Record deleted"),
        Err(_) => prompter.say("Failed to delete the record"),
    }
    Ok(())
}

fn edit_record<R: EntryRepository>(
    service: &EntryService<R>,
    prompter: &mut dyn Prompter,
) -> RepoResult<()> {
    let known_ids = list_records(service, prompter)?;
    let Prompted::Value(id) = read_entry_id(
        prompter,
        "Enter the record ID to edit, or type 'E' to exit",
        &known_ids,
    ) else {
        return cancelled(prompter);
    };

    let mut entry = service.get_entry(id)?;
    let Prompted::Value(field) = read_edit_field(prompter, EDIT_MENU) else {
        return cancelled(prompter);
    };

    match field {
        EditField::Date => {
            match read_date(prompter, "Enter the new date, MM-DD-YYYY or DD-MM-YYYY") {
                Prompted::Value(date) => entry.date = date,
                Prompted::Cancelled => return cancelled(prompter),
            }
        }
        EditField::Name => match read_non_blank(prompter, "Enter the new habit name") {
            Prompted::Value(name) => entry.habit_name = name,
            Prompted::Cancelled => return cancelled(prompter),
        },
        EditField::Quantity => match read_quantity(prompter, "Enter the new quantity") {
            Prompted::Value(quantity) => entry.quantity = quantity,
            Prompted::Cancelled => return cancelled(prompter),
        },
        EditField::Units => match read_non_blank(prompter, "Enter the new units") {
            Prompted::Value(units) => entry.units = units,
            Prompted::Cancelled => return cancelled(prompter),
        },
    }

    match service.update_entry(&entry) {
        Ok(()) => prompter.say("Record updated"),
        Err(_) => prompter.say("Failed to update the record"),
    }
    Ok(())
}

fn cancelled(prompter: &mut dyn Prompter) -> RepoResult<()> {
    prompter.say("Returning to main menu");
    Ok(())
}
