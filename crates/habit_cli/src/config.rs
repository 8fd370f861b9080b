//! Startup configuration for the interactive shell.
//!
//! There are no flags or environment variables; everything is derived from
//! the working directory the tracker is started in.

use habit_core::default_log_level;
use std::io;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "habits.db";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub db_path: PathBuf,
    /// Absolute; required by `habit_core::init_logging`.
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl TrackerConfig {
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::rooted_at(&std::env::current_dir()?))
    }

    pub fn rooted_at(base: &Path) -> Self {
        Self {
            db_path: base.join(DB_FILE_NAME),
            log_dir: base.join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }
}
