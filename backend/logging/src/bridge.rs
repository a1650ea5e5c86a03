//! Tracing Bridge
//!
//! A `tracing_subscriber` layer that forwards `tracing` events to the process-wide logger, so
//! hosts that already instrument with `tracing` get the same console and file output.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::global::log_func;
use crate::severity::Severity;

/// Events from this crate are never forwarded; they are emitted while the logger is locked.
const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

fn is_own_target(target: &str) -> bool {
    target
        .strip_prefix(OWN_TARGET)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Maps a `tracing` level onto a [`Severity`]. TRACE has no counterpart and becomes Debug.
pub fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FuncLogLayer {
    calling_info: bool,
}

impl FuncLogLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the timestamp and `[target():file:line]` block for forwarded events.
    pub fn with_calling_info(mut self, enabled: bool) -> Self {
        self.calling_info = enabled;
        self
    }
}

impl<S> Layer<S> for FuncLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if is_own_target(meta.target()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        log_func(
            severity_for(meta.level()),
            meta.file().unwrap_or("<unknown>"),
            meta.line().unwrap_or(0),
            meta.target(),
            self.calling_info,
            true,
            format_args!("{}", visitor.finish()),
        );
    }
}

/// Collects the `message` field first and appends other fields as `key=value`.
#[derive(Debug, Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SharedBuffer;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn maps_tracing_levels() {
        assert_eq!(severity_for(&Level::ERROR), Severity::Error);
        assert_eq!(severity_for(&Level::WARN), Severity::Warning);
        assert_eq!(severity_for(&Level::INFO), Severity::Info);
        assert_eq!(severity_for(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn only_this_crate_is_skipped() {
        assert!(is_own_target("funclog"));
        assert!(is_own_target("funclog::dir"));
        assert!(!is_own_target("funclog_demo"));
        assert!(!is_own_target("app"));
    }

    #[test]
    fn forwards_events_to_global_logger() {
        let console = SharedBuffer::new();
        crate::global::set_console(console.clone());

        let subscriber = tracing_subscriber::registry().with(FuncLogLayer::new());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "app", mount = "/data", "disk at {}%", 91);
            tracing::warn!(target: "funclog::internal", "skipped");
        });

        let shown = console.contents();
        assert!(shown.contains("[WARNING  ]"));
        assert!(shown.contains("disk at 91% mount=/data\n"));
        assert!(!shown.contains("skipped"));
    }
}
