//! Logging setup.
//!
//! The terminal belongs to the UI, so log output goes to a file. Without a
//! file nothing is installed and `tracing` macros are no-ops.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Configuration for logging initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level or filter directive, used when `RUST_LOG` is unset.
    pub level: String,
    /// File to append log lines to.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, file: Option<PathBuf>) -> Self {
        Self {
            level: level.into(),
            file,
        }
    }

    /// Install the global subscriber. Returns `false` when no file is
    /// configured and nothing was installed.
    pub fn init(&self) -> Result<bool> {
        let Some(path) = &self.file else {
            return Ok(false);
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::IoError { source })?;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .try_init()
            .map_err(|e| Error::LogSetup { message: e.to_string() })?;

        Ok(true)
    }
}
