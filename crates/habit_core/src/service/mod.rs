//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the record-store API used by the shell.
//! - Keep the shell decoupled from storage details and error causes.

pub mod entry_service;
