//! Line-oriented backend.
//!
//! [`LineLogger`] writes one line per call: an optional prefix, an optional
//! timestamp, and the message. It knows nothing about levels or fields, so
//! the level label is written as part of the message and fields are rendered
//! with the postfix strategy of [`PostfixMapper`].

use std::any::Any;
use std::fmt::{self, Arguments};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::mapper::{ContextualMap, LevelMapper, PostfixMapper};
use crate::{Level, Result, Value, sprint, sprintln};

/// A simple line logger over any writer.
pub struct LineLogger {
    prefix: String,
    timestamp: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl LineLogger {
    /// Create a logger writing to `out`, with no prefix and no timestamp.
    pub fn new<W: Write + Send + 'static>(out: W) -> Self {
        Self {
            prefix: String::new(),
            timestamp: false,
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Create a logger writing to stderr with timestamps.
    pub fn stderr() -> Self {
        Self::new(io::stderr()).with_timestamp(true)
    }

    /// Create a logger appending to a file, creating it and its parent
    /// directories when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }

    /// Set the prefix written at the start of every line.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Write a `YYYY/MM/DD HH:MM:SS ` UTC timestamp after the prefix.
    ///
    /// Has no effect unless the `time` feature is enabled.
    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Write one line. A newline is appended unless `message` ends with one.
    pub fn output(&self, message: &str) -> io::Result<()> {
        let mut line = String::with_capacity(self.prefix.len() + message.len() + 21);
        line.push_str(&self.prefix);
        if self.timestamp {
            push_timestamp(&mut line);
        }
        line.push_str(message);
        if !line.ends_with('\n') {
            line.push('\n');
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}

impl fmt::Debug for LineLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineLogger")
            .field("prefix", &self.prefix)
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "time")]
fn push_timestamp(line: &mut String) {
    use time::OffsetDateTime;
    use time::macros::format_description;

    let format = format_description!("[year]/[month]/[day] [hour]:[minute]:[second] ");
    if let Ok(stamp) = OffsetDateTime::now_utc().format(&format) {
        line.push_str(&stamp);
    }
}

#[cfg(not(feature = "time"))]
fn push_timestamp(_line: &mut String) {}

/// [`LevelMapper`] writing `LABEL message` lines to a [`LineLogger`].
///
/// Write errors are dropped.
#[derive(Debug, Clone)]
pub struct LineMapper {
    logger: Arc<LineLogger>,
}

impl LineMapper {
    pub fn new(logger: Arc<LineLogger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<LineLogger> {
        &self.logger
    }
}

impl LevelMapper for LineMapper {
    fn level_print(&self, level: Level, args: &[Value]) {
        let _ = self.logger.output(&format!("{}{}", level, sprint(args)));
    }

    fn level_printf(&self, level: Level, args: Arguments<'_>) {
        let _ = self.logger.output(&format!("{}{}", level, args));
    }

    fn level_println(&self, level: Level, args: &[Value]) {
        let _ = self.logger.output(&format!("{}{}", level, sprintln(args)));
    }

    fn underlying(&self) -> &dyn Any {
        &self.logger
    }
}

/// The contextual logger built on a [`LineLogger`].
///
/// [`Standard::underlying`](crate::Standard::underlying) yields the
/// `Arc<LineLogger>` given at construction.
pub type LineBackend = ContextualMap<PostfixMapper<LineMapper>>;

/// Build a contextual logger over `logger`.
pub fn new_logger(logger: Arc<LineLogger>) -> LineBackend {
    ContextualMap::new(PostfixMapper::new(LineMapper::new(logger)))
}

/// Build a contextual logger writing timestamped lines to stderr.
pub fn default_logger() -> LineBackend {
    new_logger(Arc::new(LineLogger::stderr()))
}
