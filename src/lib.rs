//! # Loggers
//!
//! A contextual logging facade with interchangeable backends.
//!
//! ## Features
//!
//! - One logger contract: print, leveled, fatal and panic calls in plain,
//!   formatted and line forms, plus attached key/value fields
//! - Backends over a plain line writer, the `log` crate and `tracing`
//! - A minimal [`mapper::LevelMapper`] primitive any backend can implement
//!   to get the full contract
//! - A process-wide default logger with free functions
//! - Integration with the `tracing` ecosystem
//!
//! ## Example
//!
//! ```rust
//! use loggers::{Advanced, Contextual, Value, infof, values};
//!
//! let logger = loggers::builder().with_timestamp(false).logger()?;
//! let logger = logger.with_fields(&values!["request_id", "7f3a", "attempt", 2]);
//!
//! logger.info(&values!["connected to ", "db"]);
//! infof!(logger => "took {}ms", 12);
//! logger.with_field("table", Value::from("users")).warnln(&values!["slow", "query"]);
//! # Ok::<(), loggers::Error>(())
//! ```

mod macros;

pub mod backend;
pub mod builder;
pub mod config;
pub mod error;
pub mod fields;
pub mod global;
pub mod level;
pub mod logger;
pub mod mapper;
pub mod tracing_init;
pub mod value;

pub use builder::{LogBuilder, build_logger, builder};
pub use config::{BackendKind, LogConfig};
pub use error::{Error, Result};
pub use fields::{Field, Fields};
pub use level::Level;
pub use logger::{Advanced, Contextual, Standard};
pub use tracing_init::init_logging;
pub use value::{Value, sprint, sprintln};
