//! Console habit tracker.
//!
//! # Responsibility
//! - Bootstrap logging and storage from the working directory.
//! - Hand control to the menu loop and close storage on exit.

mod config;
mod console;
mod menu;

use config::TrackerConfig;
use console::StdConsole;
use habit_core::{close_db, init_logging, open_db, EntryService, SqliteEntryRepository};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match TrackerConfig::from_current_dir() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Unable to determine the working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    // The tracker still works without file logs.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("Logging disabled: {err}");
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("Failed to connect to the database: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("Connected to the database.");

    let repo = match SqliteEntryRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            error!("event=app_start module=cli status=error error={err}");
            eprintln!("Database is not usable: {err}");
            return ExitCode::FAILURE;
        }
    };
    let service = EntryService::new(repo);
    menu::run(&service, &mut StdConsole);
    drop(service);

    if let Err(err) = close_db(conn) {
        eprintln!("Failed to close the database: {err}");
        return ExitCode::FAILURE;
    }
    info!("event=app_exit module=cli status=ok");
    ExitCode::SUCCESS
}
