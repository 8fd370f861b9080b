//! Entry use-case service (the record store facade).
//!
//! # Responsibility
//! - Provide CRUD entry points for the interaction shell.
//! - Collapse update/delete failures into a cause-free `WriteFailed`.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Causes of collapsed write failures are logged, never returned.

use crate::input::parse_entry_id;
use crate::model::entry::{Entry, EntryId, NewEntry};
use crate::repo::entry_repo::{EntryRepository, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Mutating operation reported by [`WriteFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Update,
    Delete,
}

impl WriteOperation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// An update or delete did not take effect.
///
/// Missing rows, validation failures and SQLite errors all map here; callers
/// are expected to have checked existence beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailed {
    pub operation: WriteOperation,
    pub id: EntryId,
}

impl Display for WriteFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to {} entry {}", self.operation.as_str(), self.id)
    }
}

impl Error for WriteFailed {}

/// Use-case service wrapper for entry CRUD operations.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new entry and returns its store-assigned id.
    pub fn add_entry(&self, entry: &NewEntry) -> RepoResult<EntryId> {
        let id = self.repo.create_entry(entry)?;
        info!("event=entry_write module=service op=add status=ok id={id}");
        Ok(id)
    }

    /// Lists every entry. Order follows storage scan order, not date.
    pub fn list_entries(&self) -> RepoResult<Vec<Entry>> {
        self.repo.list_entries()
    }

    /// Gets one entry, failing with `RepoError::NotFound` when absent.
    pub fn get_entry(&self, id: EntryId) -> RepoResult<Entry> {
        self.repo.get_entry(id)?.ok_or(RepoError::NotFound(id))
    }

    pub fn entry_exists(&self, id: EntryId) -> RepoResult<bool> {
        self.repo.entry_exists(id)
    }

    /// Like [`Self::entry_exists`] for unparsed operator text; text that is
    /// not an integer yields `Ok(false)`.
    pub fn entry_exists_raw(&self, raw: &str) -> RepoResult<bool> {
        match parse_entry_id(raw) {
            Some(id) => self.repo.entry_exists(id),
            None => Ok(false),
        }
    }

    /// Replaces all data fields of the entry with `entry.id`.
    pub fn update_entry(&self, entry: &Entry) -> Result<(), WriteFailed> {
        let result = self.repo.update_entry(entry);
        collapse(result, WriteOperation::Update, entry.id)
    }

    pub fn delete_entry(&self, id: EntryId) -> Result<(), WriteFailed> {
        let result = self.repo.delete_entry(id);
        collapse(result, WriteOperation::Delete, id)
    }
}

fn collapse(
    result: RepoResult<()>,
    operation: WriteOperation,
    id: EntryId,
) -> Result<(), WriteFailed> {
    match result {
        Ok(()) => {
            info!(
                "event=entry_write module=service op={} status=ok id={id}",
                operation.as_str()
            );
            Ok(())
        }
        Err(err) => {
            warn!(
                "event=entry_write module=service op={} status=error id={id} error={err}",
                operation.as_str()
            );
            Err(WriteFailed { operation, id })
        }
    }
}
