//! Habit entry domain model.
//!
//! # Responsibility
//! - Define the typed record shape moving between shell, validation and storage.
//! - Own the invariants every persisted entry must satisfy.
//!
//! # Invariants
//! - Every stored entry is identified by a store-assigned `EntryId`.
//! - Dates cross the storage boundary only in canonical `MM-DD-YYYY` form.

pub mod entry;
