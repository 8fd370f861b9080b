//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//! - Ensure the entries schema exists before returning a usable connection.
//!
//! # Invariants
//! - Open failures surface as `DbError::StorageUnavailable`.
//! - Returned connections always carry the `habit_entries` table.

use super::schema::{ensure_schema, SchemaStatus};
use super::{DbError, DbResult};
use chrono::Local;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens (or creates) a SQLite database file and bootstraps its schema.
///
/// A fresh entropy-seeded generator is used for demo data; it lives only for
/// the duration of this call.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let mut rng = StdRng::from_entropy();
    open_db_with_rng(path, &mut rng)
}

/// Same as [`open_db`] with a caller-supplied generator for seed data.
///
/// # Side effects
/// - Creates and seeds `habit_entries` when the table is absent.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_with_rng<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    rng: &mut R,
) -> DbResult<Connection> {
    open_with("file", || Connection::open(path), rng)
}

/// Opens an in-memory SQLite database with a seeded schema.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let mut rng = StdRng::from_entropy();
    open_with("memory", Connection::open_in_memory, &mut rng)
}

/// Releases the storage handle. Call exactly once at shutdown.
pub fn close_db(conn: Connection) -> DbResult<()> {
    match conn.close() {
        Ok(()) => {
            info!("event=db_close module=db status=ok");
            Ok(())
        }
        Err((_conn, err)) => {
            error!("event=db_close module=db status=error error={err}");
            Err(err.into())
        }
    }
}

fn open_with<R: Rng + ?Sized>(
    mode: &str,
    opener: impl FnOnce() -> rusqlite::Result<Connection>,
    rng: &mut R,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let mut conn = match opener() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(DbError::StorageUnavailable(err));
        }
    };

    match bootstrap_connection(&mut conn, rng) {
        Ok(status) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={} schema={}",
                started_at.elapsed().as_millis(),
                status.as_str()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection<R: Rng + ?Sized>(
    conn: &mut Connection,
    rng: &mut R,
) -> DbResult<SchemaStatus> {
    conn.busy_timeout(Duration::from_secs(5))?;
    ensure_schema(conn, rng, Local::now().date_naive())
}
