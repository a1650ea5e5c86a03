//! Log File Paths
//!
//! Normalizes the log directory and synthesizes `<dir><program>_<YYYY-MM-DD_HHMMSS>.log`.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};

/// Directory used when the caller supplies none, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs/";

/// Path separator appended to directories and used to split program identities.
pub const SEPARATOR: char = '/';

/// `strftime` pattern for the timestamp embedded in log file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

const LOG_EXTENSION: &str = ".log";

/// Returns `dir` with a guaranteed trailing separator.
///
/// A missing or empty directory falls back to [`DEFAULT_LOG_DIR`]. The caller's string is
/// never modified; a new owned string is always returned.
pub fn normalize_dir(dir: Option<&str>) -> String {
    match dir {
        None | Some("") => DEFAULT_LOG_DIR.to_string(),
        Some(d) if d.ends_with(SEPARATOR) => d.to_string(),
        Some(d) => format!("{d}{SEPARATOR}"),
    }
}

/// Strips leading directory components, e.g. `/usr/bin/myprog` -> `myprog`.
pub fn basename(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Timestamp fragment used in log file names.
pub fn file_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format(FILE_TIMESTAMP_FORMAT).to_string()
}

/// Builds the log file path for a program run started at `now`.
pub fn resolve_log_filename<Tz>(dir: Option<&str>, program: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let dir = normalize_dir(dir);
    let name = basename(program);
    let stamp = file_timestamp(now);
    PathBuf::from(format!("{dir}{name}_{stamp}{LOG_EXTENSION}"))
}
