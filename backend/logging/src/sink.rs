//! Sink Writer
//!
//! Emits rendered lines to the console stream and/or appends them to the log file. The file is
//! opened, written and closed on every call.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, TimeZone};

use crate::error::LogError;
use crate::format::{render, LogRecord, SinkKind};

/// Console writer shared by all records; standard error unless replaced.
pub struct SinkWriter {
    console: Box<dyn Write + Send>,
}

impl fmt::Debug for SinkWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkWriter").finish_non_exhaustive()
    }
}

impl Default for SinkWriter {
    fn default() -> Self {
        Self::stderr()
    }
}

impl SinkWriter {
    pub fn stderr() -> Self {
        Self::with_console(io::stderr())
    }

    pub fn with_console<W>(console: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            console: Box::new(console),
        }
    }

    /// Writes `text` to the console as-is and flushes.
    pub fn write_console(&mut self, text: &str) -> Result<(), LogError> {
        self.console.write_all(text.as_bytes())?;
        self.console.flush()?;
        Ok(())
    }

    /// Renders `record` once per active sink. The file receives the plain rendering first, then
    /// the console receives its own colored rendering.
    pub fn emit<Tz>(
        &mut self,
        record: &LogRecord<'_>,
        file: Option<&Path>,
        console: bool,
        now: &DateTime<Tz>,
    ) -> Result<(), LogError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if let Some(path) = file {
            append_file(path, &render(record, SinkKind::File, now))?;
        }
        if console {
            self.write_console(&render(record, SinkKind::Console, now))?;
        }
        Ok(())
    }
}

/// Opens `path` for append (creating the file), writes `text`, and closes it.
pub fn append_file(path: &Path, text: &str) -> Result<(), LogError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

/// In-memory console target that stays readable after being handed to a [`SinkWriter`].
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|p| p.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
