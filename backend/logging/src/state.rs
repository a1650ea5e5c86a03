//! Logger State
//!
//! Threshold, sink flags and the resolved log file path, with a one-shot
//! `initialize`/`cleanup` lifecycle. [`Logger`] is a plain value for embedding and tests;
//! the process-wide instance used by the logging macros lives in [`crate::global`].

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::dir::ensure_directory;
use crate::error::LogError;
use crate::format::{invalid_level, render_error, CallSite, LogRecord};
use crate::path::{normalize_dir, resolve_log_filename};
use crate::severity::Severity;
use crate::sink::SinkWriter;

/// Caller-facing initialization options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// Minimum severity written; must be Debug, Info, Warning or Error.
    pub level: Severity,
    /// Log directory; `logs/` when absent or empty.
    pub directory: Option<String>,
    pub to_file: bool,
    pub to_console: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            directory: None,
            to_file: true,
            to_console: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Initialized,
    /// Torn down. The threshold is kept so a second `initialize` is still rejected.
    CleanedUp,
}

/// Resolved configuration; only `cleanup` mutates it after `initialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub threshold: Severity,
    pub to_file: bool,
    pub to_console: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for LoggerConfig {
    /// Pre-initialization behaviour: console only, nothing but `Off` filtered.
    fn default() -> Self {
        Self {
            threshold: Severity::Off,
            to_file: false,
            to_console: true,
            log_file: None,
        }
    }
}

/// Clock used for file names and record timestamps.
pub type Clock = fn() -> DateTime<Local>;

pub struct Logger {
    lifecycle: Lifecycle,
    config: LoggerConfig,
    sinks: SinkWriter,
    clock: Clock,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("lifecycle", &self.lifecycle)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Uninitialized logger writing its console output to standard error.
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Uninitialized,
            config: LoggerConfig::default(),
            sinks: SinkWriter::stderr(),
            clock: Local::now,
        }
    }

    /// Replaces the console stream.
    pub fn with_console<W>(mut self, console: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.sinks = SinkWriter::with_console(console);
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn set_console<W>(&mut self, console: W)
    where
        W: Write + Send + 'static,
    {
        self.sinks = SinkWriter::with_console(console);
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn threshold(&self) -> Severity {
        self.config.threshold
    }

    /// Path of the active log file, if the file sink is enabled.
    pub fn log_file_path(&self) -> Option<&Path> {
        if self.config.to_file {
            self.config.log_file.as_deref()
        } else {
            None
        }
    }

    /// Whether a record at `severity` would be written.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.passes(self.config.threshold)
    }

    /// Configures the logger once.
    ///
    /// `program` is the program identity (usually the first process argument); without it the
    /// file sink is silently disabled. With the file sink enabled, the log directory is created
    /// and the file name resolved here. Nothing is changed when an error is returned.
    pub fn initialize(
        &mut self,
        options: &LoggerOptions,
        program: Option<&str>,
    ) -> Result<(), LogError> {
        if self.lifecycle != Lifecycle::Uninitialized {
            return Err(LogError::AlreadyInitialized);
        }
        if !options.level.is_valid_threshold() {
            return Err(LogError::InvalidThreshold(options.level));
        }

        let program = program.filter(|p| !p.is_empty());
        let mut to_file = options.to_file;
        if to_file && program.is_none() {
            warn!("No program identity given; file logging disabled");
            to_file = false;
        }

        let log_file = match (to_file, program) {
            (true, Some(program)) => {
                let dir = normalize_dir(options.directory.as_deref());
                ensure_directory(&dir)?;
                let path = resolve_log_filename(Some(dir.as_str()), program, &(self.clock)());
                info!(path = %path.display(), "Resolved log file");
                Some(path)
            }
            _ => None,
        };

        self.config = LoggerConfig {
            threshold: options.level,
            to_file,
            to_console: options.to_console,
            log_file,
        };
        self.lifecycle = Lifecycle::Initialized;
        debug!(threshold = %options.level, to_file, to_console = options.to_console, "Logger initialized");
        Ok(())
    }

    /// Writes `record` to every enabled sink unless it is filtered out.
    pub fn log(&mut self, record: &LogRecord<'_>) -> Result<(), LogError> {
        if !self.is_enabled(record.severity) {
            return Ok(());
        }
        let now = (self.clock)();
        let file = match self.config.to_file {
            true => self.config.log_file.as_deref(),
            false => None,
        };
        self.sinks.emit(record, file, self.config.to_console, &now)
    }

    /// Logging primitive behind the macros. `level` may be a [`Severity`] or a raw level code;
    /// a code that maps to no severity is rejected with [`LogError::InvalidLevel`].
    pub fn log_call<L>(
        &mut self,
        level: L,
        site: CallSite<'_>,
        show_calling_info: bool,
        append_newline: bool,
        args: fmt::Arguments<'_>,
    ) -> Result<(), LogError>
    where
        L: TryInto<Severity>,
    {
        let severity = level.try_into().map_err(|_| invalid_level(&site))?;
        self.log(&LogRecord {
            severity,
            call_site: site,
            args,
            show_calling_info,
            append_newline,
        })
    }

    /// Writes an error diagnostic to the console stream, whether or not the console sink is enabled.
    pub fn report(&mut self, err: &LogError) {
        let _ = self.sinks.write_console(&render_error(err));
    }

    /// Releases the resolved log file path. Safe to call repeatedly or before `initialize`.
    pub fn cleanup(&mut self) {
        if self.config.log_file.take().is_some() {
            debug!("Released log file path");
        }
        self.config.to_file = false;
        if self.lifecycle == Lifecycle::Initialized {
            self.lifecycle = Lifecycle::CleanedUp;
        }
    }
}
