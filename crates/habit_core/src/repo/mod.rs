//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for habit entries.
//! - Isolate SQLite query details from service/shell orchestration.
//!
//! # Invariants
//! - Repository writes must enforce entry validation before persistence.
//! - Every query binds caller values as parameters; SQL text never embeds
//!   operator input.

pub mod entry_repo;
