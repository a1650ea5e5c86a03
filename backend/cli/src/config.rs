use anyhow::{Context, Result};
use funclog::{LoggerOptions, Severity};
use serde::Deserialize;

/// Demo runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging threshold
    pub level: Severity,
    /// Log directory; the library default when unset
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        let level = match std::env::var("FUNCLOG_LEVEL") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid FUNCLOG_LEVEL value: {raw}"))?,
            Err(_) => Severity::Info,
        };
        Ok(Self {
            level,
            log_dir: std::env::var("FUNCLOG_DIR").ok().filter(|d| !d.is_empty()),
        })
    }

    pub fn logger_options(&self, to_file: bool, to_console: bool) -> LoggerOptions {
        LoggerOptions {
            level: self.level,
            directory: self.log_dir.clone(),
            to_file,
            to_console,
        }
    }
}
