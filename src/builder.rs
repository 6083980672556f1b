//! Builder pattern for configuring the facade logger.
//!
//! This module provides a convenient builder API for choosing a backend,
//! installing the tracing subscriber and setting the process-wide default
//! logger in a single chain of method calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use loggers::{Advanced, BackendKind, Value, values};
//!
//! // Line logger on stderr as the default
//! loggers::builder()
//!     .with_prefix("[app] ")
//!     .init()
//!     .expect("Failed to initialize logging");
//!
//! // tracing console output, with the facade emitting tracing events
//! loggers::builder()
//!     .with_backend(BackendKind::Tracing)
//!     .with_console(true)
//!     .with_level("debug")
//!     .init()
//!     .expect("Failed to initialize logging");
//!
//! loggers::global::with_field("user", Value::from("bob")).info(&values!["logged in"]);
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::{LineLogger, line, logkv, tracer::TracingBackend};
use crate::{BackendKind, Contextual, LogConfig, Result, global, init_logging};

/// A builder for configuring and initializing logging.
///
/// This provides a fluent interface for setting up logging configuration
/// and initializing the logging system in one chain of calls.
#[derive(Debug, Clone)]
pub struct LogBuilder {
    config: LogConfig,
}

impl LogBuilder {
    /// Create a new LogBuilder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LogConfig::new(),
        }
    }

    /// Create a LogBuilder from an existing configuration.
    pub fn from_config(config: LogConfig) -> Self {
        Self { config }
    }

    /// Choose the backend of the facade logger.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.config = self.config.with_backend(backend);
        self
    }

    /// Enable or disable console logging.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config = self.config.with_console(enabled);
        self
    }

    /// Set the log level (e.g., "trace", "debug", "info", "warn", "error").
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config = self.config.with_level(level.into());
        self
    }

    /// Set the log output format ("text" or "json").
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.config = self.config.with_format(format.into());
        self
    }

    /// Show target/module in logs
    pub fn with_target(mut self, target: bool) -> Self {
        self.config = self.config.with_target(target);
        self
    }

    /// Show thread IDs in logs
    pub fn with_thread_ids(mut self, thread_ids: bool) -> Self {
        self.config = self.config.with_thread_ids(thread_ids);
        self
    }

    /// Show thread names in logs
    pub fn with_thread_names(mut self, thread_names: bool) -> Self {
        self.config = self.config.with_thread_names(thread_names);
        self
    }

    /// Set the prefix of lines written by the line backend.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config = self.config.with_prefix(prefix.into());
        self
    }

    /// Enable or disable line backend timestamps.
    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.config = self.config.with_timestamp(timestamp);
        self
    }

    /// Append line backend output to a file instead of stderr.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_file(path);
        self
    }

    /// Get the current configuration without initializing.
    pub fn build(self) -> LogConfig {
        self.config
    }

    /// Construct the configured logger without touching any global state.
    pub fn logger(&self) -> Result<Box<dyn Contextual>> {
        build_logger(&self.config)
    }

    /// Initialize logging with the configured settings.
    ///
    /// This consumes the builder, installs the tracing console subscriber
    /// when console output is enabled, and makes the configured logger the
    /// process-wide default. With console output disabled the `log` and
    /// `tracing` backends forward to whatever subscriber or logger the caller
    /// has installed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Console output is enabled and a tracing subscriber is already initialized
    /// - The output file cannot be opened
    /// - Invalid configuration is provided
    pub fn init(self) -> Result<()> {
        self.config.validate()?;
        if self.config.console {
            init_logging(&self.config, None)?;
        }
        let logger = build_logger(&self.config)?;
        global::set_default(logger);
        Ok(())
    }
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a [`LogBuilder`] with default configuration.
pub fn builder() -> LogBuilder {
    LogBuilder::new()
}

/// Construct the logger described by `config`.
///
/// The `log` and `tracing` backends forward to whatever is installed
/// globally for those crates at the time of each call or of this call,
/// respectively.
pub fn build_logger(config: &LogConfig) -> Result<Box<dyn Contextual>> {
    config.validate()?;
    let logger: Box<dyn Contextual> = match config.backend {
        BackendKind::Line => {
            let out = match &config.file {
                Some(path) => LineLogger::open(path)?,
                None => LineLogger::new(std::io::stderr()),
            };
            let out = out
                .with_prefix(config.prefix.as_str())
                .with_timestamp(config.timestamp);
            Box::new(line::new_logger(Arc::new(out)))
        }
        BackendKind::Log => Box::new(logkv::default_logger()),
        BackendKind::Tracing => Box::new(TracingBackend::current()),
    };
    Ok(logger)
}
