//! Logger Errors
//!
//! Fatal usage and environment failures, plus per-call failures that only drop the call.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::severity::Severity;

/// Errors raised by the logger.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Logger already initialised in the project")]
    AlreadyInitialized,

    #[error("Invalid logging threshold {0}: expected DEBUG, INFO, WARNING or ERROR")]
    InvalidThreshold(Severity),

    #[error("Unable to create the log directory '{}'", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to create the log directory '{}': a path segment is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("File '{}' not existing or Permission denied", path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write to log sink failed: {0}")]
    Write(#[from] io::Error),

    #[error("Invalid logging level provided\nWhere: [{function}():{file}] Line: {line}")]
    InvalidLevel {
        function: String,
        file: String,
        line: u32,
    },
}

impl LogError {
    /// Usage and environment errors end the process; per-call errors only drop the call.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LogError::InvalidLevel { .. } | LogError::Write(_))
    }
}
