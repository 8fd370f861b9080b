//! Create-if-absent schema for the entries table.
//!
//! # Invariants
//! - The table is created and seeded in one transaction, so a crash never
//!   leaves an empty-but-present table that would skip seeding on restart.
//! - An existing table is left untouched.

use super::seed::{generate_seed_entries, insert_seed_entries, SEED_ENTRY_COUNT};
use super::DbResult;
use chrono::NaiveDate;
use log::info;
use rand::Rng;
use rusqlite::Connection;

/// Name of the single table owned by the store.
pub const ENTRIES_TABLE: &str = "habit_entries";

/// Columns a connection must expose before repositories accept it.
pub const ENTRIES_COLUMNS: &[&str] = &["id", "date", "habit_name", "quantity", "units"];

const CREATE_ENTRIES_SQL: &str = "CREATE TABLE habit_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    habit_name TEXT NOT NULL,
    quantity INTEGER,
    units TEXT
);";

/// Outcome of [`ensure_schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Table was absent; it was created and seeded with `seeded` rows.
    Created { seeded: usize },
    /// Table already existed; nothing was written.
    Existing,
}

impl SchemaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Existing => "existing",
        }
    }
}

/// Creates and seeds `habit_entries` if it does not exist yet.
///
/// `today` bounds the sampled seed dates from above.
pub fn ensure_schema<R: Rng + ?Sized>(
    conn: &mut Connection,
    rng: &mut R,
    today: NaiveDate,
) -> DbResult<SchemaStatus> {
    if table_exists(conn, ENTRIES_TABLE)? {
        return Ok(SchemaStatus::Existing);
    }

    let seed_entries = generate_seed_entries(rng, today, SEED_ENTRY_COUNT);

    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_ENTRIES_SQL)?;
    let seeded = insert_seed_entries(&tx, &seed_entries)?;
    tx.commit()?;

    info!("event=schema_init module=db status=ok table={ENTRIES_TABLE} seeded={seeded}");
    Ok(SchemaStatus::Created { seeded })
}

/// Returns whether a table with `table_name` exists on `conn`.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
