use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which backend the configured logger is built on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Plain lines through [`crate::backend::LineLogger`]
    #[default]
    Line,
    /// Records through the `log` crate
    Log,
    /// Events through `tracing`
    Tracing,
}

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Backend the facade logger is built on
    #[serde(default)]
    pub backend: BackendKind,
    /// Enable console logging through the tracing subscriber
    #[serde(default)]
    pub console: bool,
    /// Log level (e.g., "info", "debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
    /// Show target/module in console logs
    #[serde(default)]
    pub target: bool,
    /// Show thread IDs in console logs
    #[serde(default)]
    pub thread_ids: bool,
    /// Show thread names in console logs
    #[serde(default)]
    pub thread_names: bool,
    /// Prefix of every line written by the line backend
    #[serde(default)]
    pub prefix: String,
    /// Timestamp lines written by the line backend
    #[serde(default = "default_timestamp")]
    pub timestamp: bool,
    /// File the line backend appends to instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Create a new LogConfig with defaults
    pub fn new() -> Self {
        Self {
            backend: BackendKind::default(),
            console: false,
            level: default_log_level(),
            format: default_format(),
            target: false,
            thread_ids: false,
            thread_names: false,
            prefix: String::new(),
            timestamp: default_timestamp(),
            file: None,
        }
    }

    /// Set the backend
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Enable console logging
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Set log level
    pub fn with_level(mut self, level: String) -> Self {
        self.level = level;
        self
    }

    /// Set log format
    pub fn with_format(mut self, format: String) -> Self {
        self.format = format;
        self
    }

    /// Show target/module in logs
    pub fn with_target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }

    /// Show thread IDs in logs
    pub fn with_thread_ids(mut self, thread_ids: bool) -> Self {
        self.thread_ids = thread_ids;
        self
    }

    /// Show thread names in logs
    pub fn with_thread_names(mut self, thread_names: bool) -> Self {
        self.thread_names = thread_names;
        self
    }

    /// Set the line prefix
    pub fn with_prefix(mut self, prefix: String) -> Self {
        self.prefix = prefix;
        self
    }

    /// Enable or disable line timestamps
    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the output file of the line backend
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Check that the configuration can be acted on.
    pub fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(Error::Config(format!(
                "unknown log format {:?}, expected \"text\" or \"json\"",
                other
            ))),
        }
    }

    pub(crate) fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_timestamp() -> bool {
    true
}
