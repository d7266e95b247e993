//! Runtime configuration read from the environment.

use route_nexus::LoggingConfig;
use std::path::PathBuf;
use std::time::Duration;

pub const LOG_LEVEL_VAR: &str = "ROUTE_DEMO_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "ROUTE_DEMO_LOG_FILE";
pub const TICK_MS_VAR: &str = "ROUTE_DEMO_TICK_MS";

const DEFAULT_TICK_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub tick_rate: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let level = lookup(LOG_LEVEL_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.logging.level);
        let file = lookup(LOG_FILE_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let tick_rate = lookup(TICK_MS_VAR)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_rate);

        Self {
            logging: LoggingConfig::new(level, file),
            tick_rate,
        }
    }
}
