//! Core domain logic for the habit tracker.
//! This crate owns entry invariants, input validation and SQLite persistence.

pub mod db;
pub mod input;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{close_db, open_db, open_db_in_memory, open_db_with_rng, DbError, DbResult};
pub use input::{EditField, Prompted, Prompter};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{format_date, Entry, EntryId, EntryValidationError, NewEntry};
pub use repo::entry_repo::{EntryRepository, RepoError, RepoResult, SqliteEntryRepository};
pub use service::entry_service::{EntryService, WriteFailed, WriteOperation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
