//! Record Formatting
//!
//! Renders a [`LogRecord`] as one line of text for a given sink. Console lines get an ANSI
//! colored level tag; file lines are plain text.

use std::fmt::{self, Write as _};

use chrono::{DateTime, TimeZone};

use crate::error::LogError;
use crate::path::basename;
use crate::severity::Severity;

pub const RESET: &str = "\x1b[0m";
pub const BLUE: &str = "\x1b[34m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";

/// `strftime` pattern for the per-record timestamp, e.g. `05/01/23@12:00:00`.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%m/%d/%y@%H:%M:%S";

/// Width the level name is padded to inside its brackets.
pub const TAG_WIDTH: usize = 9;

/// Output destination a line is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File,
}

/// Where a logging call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
}

/// One logging call. Built fresh per call and never stored.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub call_site: CallSite<'a>,
    pub args: fmt::Arguments<'a>,
    pub show_calling_info: bool,
    pub append_newline: bool,
}

/// ANSI color used for a level's tag on the console.
pub const fn color(severity: Severity) -> &'static str {
    match severity {
        Severity::Default | Severity::Off => RESET,
        Severity::Debug => BLUE,
        Severity::Info => GREEN,
        Severity::Warning => YELLOW,
        Severity::Error => RED,
    }
}

/// Fixed-width tag such as `[INFO     ]`. `Default` has no tag.
pub fn level_tag(severity: Severity) -> Option<String> {
    match severity {
        Severity::Default => None,
        other => Some(format!("[{:<width$}]", other.name(), width = TAG_WIDTH)),
    }
}

/// Renders `record` for `sink`, using `now` for the timestamp when calling info is shown.
pub fn render<Tz>(record: &LogRecord<'_>, sink: SinkKind, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut line = String::new();

    if record.show_calling_info {
        let _ = write!(line, "[{}]", now.format(RECORD_TIMESTAMP_FORMAT));
    }

    if let Some(tag) = level_tag(record.severity) {
        match sink {
            SinkKind::Console => {
                let _ = write!(line, "{}{tag}{RESET}", color(record.severity));
            }
            SinkKind::File => line.push_str(&tag),
        }
    }

    if record.show_calling_info {
        let site = &record.call_site;
        let _ = write!(
            line,
            "[{}():{}:{}] ",
            site.function,
            basename(site.file),
            site.line
        );
    }

    let _ = write!(line, "{}", record.args);
    if record.append_newline {
        line.push('\n');
    }
    line
}

/// Console diagnostic for a logger error, e.g. `Error: Logger already initialised ...`.
///
/// Fatal errors carry the exit notice.
pub fn render_error(err: &LogError) -> String {
    let mut out = format!("{RED}Error:{RESET} {err}\n");
    if err.is_fatal() {
        out.push_str("Exiting the program with status 1.\n");
    }
    out
}

/// Error for a logging call whose level is not a [`Severity`].
pub fn invalid_level(site: &CallSite<'_>) -> LogError {
    LogError::InvalidLevel {
        function: site.function.to_string(),
        file: basename(site.file).to_string(),
        line: site.line,
    }
}
