use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Severity attached to a log call.
///
/// The set is closed and totally ordered from `Debug` (least severe) to
/// `Panic` (most severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Excessive debug information.
    Debug,
    /// General information.
    Info,
    /// Something looks wrong.
    Warn,
    /// A real error occurred.
    Error,
    /// Execution cannot continue; the process exits after logging.
    Fatal,
    /// A panic is desired; the caller unwinds after logging.
    Panic,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    /// Fixed-width label used as the line prefix.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG ",
            Level::Info => "INFO  ",
            Level::Warn => "WARN  ",
            Level::Error => "ERROR ",
            Level::Fatal => "FATAL ",
            Level::Panic => "PANIC ",
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Config(format!("unknown log level: {}", s)))
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Level::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::Config(format!("log level out of range: {}", value)))
    }
}
