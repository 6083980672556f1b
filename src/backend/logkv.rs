//! Backend over the [`log`] crate, using its structured key/value records.
//!
//! Every call becomes one [`log::Record`]. Accumulated fields are attached as
//! native key/values, followed by any attributes passed with the call itself:
//! on the plain and line variants a leading string argument is the message
//! and the remaining arguments are read as extra key/value pairs.
//!
//! `log` has no fatal or panic level; both are recorded at
//! [`log::Level::Error`].

use std::any::Any;
use std::fmt::{self, Arguments};
use std::sync::Arc;

use log::kv::{self, VisitSource};

use crate::mapper::{ContextualMap, ContextualMapper, LevelMapper};
use crate::{Contextual, Fields, Level, Value};

const DEFAULT_TARGET: &str = "loggers";

/// [`LevelMapper`] emitting records to a [`log::Log`] implementation.
///
/// Plain and line calls read every argument after a leading string message
/// as key/value pairs, so `info(&values!["connected to ", "db"])` records the
/// message `connected to ` and drops the unpaired `db`. Use the formatted
/// variants for multi-part messages.
#[derive(Clone)]
pub struct LogKvMapper {
    logger: Arc<dyn log::Log>,
    target: Arc<str>,
    fields: Fields,
}

impl LogKvMapper {
    pub fn new(logger: Arc<dyn log::Log>) -> Self {
        Self {
            logger,
            target: Arc::from(DEFAULT_TARGET),
            fields: Fields::new(),
        }
    }

    /// Set the record target (defaults to `loggers`).
    pub fn with_target(mut self, target: impl AsRef<str>) -> Self {
        self.target = Arc::from(target.as_ref());
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn emit(&self, level: Level, args: Arguments<'_>, extra: &Fields) {
        let source = FieldSource {
            fields: &self.fields,
            extra,
        };
        self.logger.log(
            &log::Record::builder()
                .args(args)
                .level(log_level(level))
                .target(&self.target)
                .key_values(&source)
                .build(),
        );
    }

    fn emit_args(&self, level: Level, args: &[Value]) {
        let (message, attrs) = split_message(args);
        self.emit(level, format_args!("{}", message), &Fields::from_pairs(attrs));
    }
}

impl fmt::Debug for LogKvMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogKvMapper")
            .field("target", &self.target)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl LevelMapper for LogKvMapper {
    fn level_print(&self, level: Level, args: &[Value]) {
        self.emit_args(level, args);
    }

    fn level_printf(&self, level: Level, args: Arguments<'_>) {
        self.emit(level, args, &Fields::new());
    }

    fn level_println(&self, level: Level, args: &[Value]) {
        self.emit_args(level, args);
    }

    fn underlying(&self) -> &dyn Any {
        &self.logger
    }
}

impl ContextualMapper for LogKvMapper {
    fn with_fields(&self, fields: &[Value]) -> Box<dyn Contextual> {
        Box::new(ContextualMap::new(Self {
            logger: Arc::clone(&self.logger),
            target: Arc::clone(&self.target),
            fields: self.fields.with_pairs(fields),
        }))
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }
}

/// The contextual logger built on a [`log::Log`].
///
/// [`Standard::underlying`](crate::Standard::underlying) yields the
/// `Arc<dyn log::Log>` given at construction.
pub type LogKvBackend = ContextualMap<LogKvMapper>;

/// Build a contextual logger over `logger`.
pub fn new_logger(logger: Arc<dyn log::Log>) -> LogKvBackend {
    ContextualMap::new(LogKvMapper::new(logger))
}

/// Build a contextual logger over `logger` using a custom record target.
pub fn with_target(logger: Arc<dyn log::Log>, target: &str) -> LogKvBackend {
    ContextualMap::new(LogKvMapper::new(logger).with_target(target))
}

/// Build a contextual logger forwarding to whatever [`log::logger`] is
/// installed at the time of each call.
pub fn default_logger() -> LogKvBackend {
    new_logger(Arc::new(GlobalLog))
}

/// Forwards to the process-wide `log` logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalLog;

impl log::Log for GlobalLog {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if record.level() <= log::max_level() {
            log::logger().log(record);
        }
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

fn log_level(level: Level) -> log::Level {
    match level {
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error | Level::Fatal | Level::Panic => log::Level::Error,
    }
}

/// Split a leading string message off the attribute arguments.
fn split_message(args: &[Value]) -> (&str, &[Value]) {
    match args.split_first() {
        Some((Value::Str(message), rest)) => (message.as_str(), rest),
        _ => ("", args),
    }
}

struct FieldSource<'a> {
    fields: &'a Fields,
    extra: &'a Fields,
}

impl kv::Source for FieldSource<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        for field in self.fields.iter().chain(self.extra.iter()) {
            visitor.visit_pair(kv::Key::from_str(field.key()), kv_value(field.value()))?;
        }
        Ok(())
    }
}

fn kv_value(value: &Value) -> kv::Value<'_> {
    match value {
        Value::Null => kv::Value::from("<nil>"),
        Value::Bool(b) => kv::Value::from(*b),
        Value::Int(i) => kv::Value::from(*i),
        Value::Uint(u) => kv::Value::from(*u),
        Value::Float(x) => kv::Value::from(*x),
        Value::Str(s) => kv::Value::from(s.as_str()),
        Value::Display(d) => kv::Value::from_dyn_display(&**d),
    }
}
