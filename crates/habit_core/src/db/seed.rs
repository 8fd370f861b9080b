//! Randomized demo rows written once when the entries table is created.

use super::DbResult;
use crate::model::entry::{format_date, NewEntry};
use chrono::{Days, NaiveDate};
use log::debug;
use rand::Rng;
use rusqlite::{params, Connection};

/// Number of demo rows inserted at first-time schema creation.
pub const SEED_ENTRY_COUNT: usize = 100;

/// Seed quantities are sampled from `1..SEED_QUANTITY_END`.
pub const SEED_QUANTITY_END: i64 = 60;

pub const SEED_HABITS: &[&str] = &[
    "swimming", "running", "walking", "cycling", "working", "cooking", "coding", "reading",
];

pub const SEED_UNITS: &[&str] = &["minutes", "hours", "miles", "kilometers"];

/// Earliest date a seed row can carry.
pub fn seed_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Builds `count` random entries dated between [`seed_start_date`] and
/// `today`, inclusive.
pub fn generate_seed_entries<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    count: usize,
) -> Vec<NewEntry> {
    let start = seed_start_date();
    let span_days = (today - start).num_days().max(0) as u64;

    (0..count)
        .map(|_| {
            let offset = rng.gen_range(0..=span_days);
            NewEntry {
                date: start.checked_add_days(Days::new(offset)).unwrap_or(start),
                habit_name: pick(rng, SEED_HABITS).to_string(),
                quantity: rng.gen_range(1..SEED_QUANTITY_END),
                units: pick(rng, SEED_UNITS).to_string(),
            }
        })
        .collect()
}

/// Inserts seed rows through one cached prepared statement.
pub fn insert_seed_entries(conn: &Connection, entries: &[NewEntry]) -> DbResult<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO habit_entries (date, habit_name, quantity, units)
         VALUES (?1, ?2, ?3, ?4);",
    )?;

    for entry in entries {
        stmt.execute(params![
            format_date(entry.date),
            entry.habit_name.as_str(),
            entry.quantity,
            entry.units.as_str(),
        ])?;
    }

    debug!("event=seed module=db status=ok rows={}", entries.len());
    Ok(entries.len())
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, vocabulary: &[&'a str]) -> &'a str {
    vocabulary[rng.gen_range(0..vocabulary.len())]
}
