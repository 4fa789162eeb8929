// Runtime configuration (flags + environment)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;

pub const DEFAULT_DB_PATH: &str = "~/.jobfolio/jobs.db";

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, colored
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    /// Expand `~` in the database path and make sure its directory exists
    pub fn resolve(db_path: &str, log_format: LogFormat) -> Result<Self> {
        let db_path = PathBuf::from(shellexpand::tilde(db_path).into_owned());

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create data directory {}", parent.display()))?;
        }

        Ok(Self {
            db_path,
            log_format,
        })
    }

    /// Connection string for the SQLite pool
    pub fn database_url(&self) -> String {
        format!("sqlite://{}", self.db_path.display())
    }
}
