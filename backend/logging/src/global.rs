//! Process-wide logger used by the logging macros.
//!
//! Fatal errors are turned into a console diagnostic, cleanup, and exit status 1 here and
//! nowhere else; [`Logger`] itself only returns errors.

use std::fmt;
use std::io::Write;
use std::process;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::error::LogError;
use crate::format::CallSite;
use crate::severity::Severity;
use crate::state::{Logger, LoggerOptions};

/// Exit status for every fatal logger condition.
pub const FATAL_EXIT_CODE: i32 = 1;

static LOGGER: Lazy<Mutex<Logger>> = Lazy::new(|| Mutex::new(Logger::new()));

/// Locks the process-wide logger.
pub fn logger() -> MutexGuard<'static, Logger> {
    LOGGER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Program identity from the first process argument.
pub fn program_identity() -> Option<String> {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
}

/// Initializes the process-wide logger, returning errors instead of exiting.
pub fn try_init_logger(options: &LoggerOptions, program: Option<&str>) -> Result<(), LogError> {
    logger().initialize(options, program)
}

/// Initializes the process-wide logger. Any failure is fatal and exits with status 1.
pub fn init_logger(options: &LoggerOptions, program: Option<&str>) {
    let mut logger = logger();
    if let Err(err) = logger.initialize(options, program) {
        exit_fatal(logger, &err);
    }
}

/// Releases logger resources. Safe to call at any time, any number of times.
pub fn log_cleanup() {
    logger().cleanup();
}

/// Redirects the console sink of the process-wide logger.
pub fn set_console<W>(console: W)
where
    W: Write + Send + 'static,
{
    logger().set_console(console);
}

/// Logging primitive the macros expand to.
///
/// An invalid `level` prints a diagnostic naming the call site and drops the call. Failing to
/// open the log file is fatal.
pub fn log_func<L>(
    level: L,
    file: &str,
    line: u32,
    function: &str,
    show_calling_info: bool,
    append_newline: bool,
    args: fmt::Arguments<'_>,
) where
    L: TryInto<Severity>,
{
    let site = CallSite {
        file,
        line,
        function,
    };
    // Arguments may log from their own `Display`; format them before taking the lock.
    let message = args.to_string();
    let mut logger = logger();
    match logger.log_call(
        level,
        site,
        show_calling_info,
        append_newline,
        format_args!("{message}"),
    ) {
        Ok(()) => {}
        Err(err) if err.is_fatal() => exit_fatal(logger, &err),
        Err(err) => logger.report(&err),
    }
}

fn exit_fatal(mut logger: MutexGuard<'_, Logger>, err: &LogError) -> ! {
    logger.report(err);
    logger.cleanup();
    drop(logger);
    process::exit(FATAL_EXIT_CODE);
}
