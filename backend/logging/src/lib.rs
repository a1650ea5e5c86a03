//! Leveled, timestamped logging to standard error and a per-run log file.
//!
//! Initialize once with [`init_logger`], log through the [`log!`], [`logl!`], [`logf!`] and
//! [`logfl!`] macro families, and call [`log_cleanup`] before exiting. Log files are named
//! `<dir>/<program>_<YYYY-MM-DD_HHMMSS>.log`; the directory is created on demand.

pub mod bridge;
pub mod dir;
pub mod error;
pub mod format;
pub mod global;
mod macros;
pub mod path;
pub mod severity;
pub mod sink;
pub mod state;
pub mod version;

pub use bridge::FuncLogLayer;
pub use dir::ensure_directory;
pub use error::LogError;
pub use format::{render, CallSite, LogRecord, SinkKind};
pub use global::{
    init_logger, log_cleanup, log_func, logger, program_identity, set_console, try_init_logger,
    FATAL_EXIT_CODE,
};
pub use path::{resolve_log_filename, DEFAULT_LOG_DIR};
pub use severity::Severity;
pub use sink::SinkWriter;
pub use state::{Lifecycle, Logger, LoggerConfig, LoggerOptions};
