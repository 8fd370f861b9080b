//! Entry repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `habit_entries` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate entries before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Single-row reads check for row presence before decoding.

use crate::db::schema::{table_exists, ENTRIES_COLUMNS, ENTRIES_TABLE};
use crate::db::DbError;
use crate::model::entry::{
    format_date, parse_canonical_date, Entry, EntryId, EntryValidationError, NewEntry,
};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    date,
    habit_name,
    quantity,
    units
FROM habit_entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    NotFound(EntryId),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for entry CRUD operations.
pub trait EntryRepository {
    fn create_entry(&self, entry: &NewEntry) -> RepoResult<EntryId>;
    fn update_entry(&self, entry: &Entry) -> RepoResult<()>;
    fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>>;
    fn entry_exists(&self, id: EntryId) -> RepoResult<bool>;
    /// Returns every entry in storage scan order.
    fn list_entries(&self) -> RepoResult<Vec<Entry>>;
    fn delete_entry(&self, id: EntryId) -> RepoResult<()>;
}

/// SQLite-backed entry repository.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    ///
    /// Rejects connections that never went through `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn create_entry(&self, entry: &NewEntry) -> RepoResult<EntryId> {
        entry.validate()?;

        self.conn.execute(
            "INSERT INTO habit_entries (date, habit_name, quantity, units)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                format_date(entry.date),
                entry.habit_name.as_str(),
                entry.quantity,
                entry.units.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_entry(&self, entry: &Entry) -> RepoResult<()> {
        entry.validate()?;

        let changed = self.conn.execute(
            "UPDATE habit_entries
             SET
                date = ?1,
                habit_name = ?2,
                quantity = ?3,
                units = ?4
             WHERE id = ?5;",
            params![
                format_date(entry.date),
                entry.habit_name.as_str(),
                entry.quantity,
                entry.units.as_str(),
                entry.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(entry.id));
        }

        Ok(())
    }

    fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }

        Ok(None)
    }

    fn entry_exists(&self, id: EntryId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM habit_entries WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn list_entries(&self) -> RepoResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!("{ENTRY_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }

    fn delete_entry(&self, id: EntryId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM habit_entries WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, ENTRIES_TABLE)? {
        return Err(RepoError::MissingRequiredTable(ENTRIES_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([ENTRIES_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for &column in ENTRIES_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: ENTRIES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let id: EntryId = row.get("id")?;

    let date_text: String = row.get("date")?;
    let date = parse_canonical_date(&date_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid date value `{date_text}` in habit_entries.date (id {id})"
        ))
    })?;

    let quantity = row.get::<_, Option<i64>>("quantity")?.ok_or_else(|| {
        RepoError::InvalidData(format!("null quantity in habit_entries.quantity (id {id})"))
    })?;

    let units = row.get::<_, Option<String>>("units")?.ok_or_else(|| {
        RepoError::InvalidData(format!("null units in habit_entries.units (id {id})"))
    })?;

    let entry = Entry {
        id,
        date,
        habit_name: row.get("habit_name")?,
        quantity,
        units,
    };
    entry.validate()?;
    Ok(entry)
}
