use thiserror::Error as ThisError;

use crate::{Standard, Value};

/// Errors that can occur in the logging facade
#[derive(ThisError, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Initialization failed.
    #[error("Initialization error: {0}")]
    Init(String),
    /// Execution cannot continue. Raised as a fatal log and process exit.
    #[error("{0}")]
    Fatal(String),
    /// A panic is desired. Raised as a panic log and unwind.
    #[error("{0}")]
    Panic(String),
}

impl Error {
    /// Create a [`Error::Fatal`].
    pub fn fatal(message: impl Into<String>) -> Self {
        Error::Fatal(message.into())
    }

    /// Create a [`Error::Panic`].
    pub fn panic(message: impl Into<String>) -> Self {
        Error::Panic(message.into())
    }

    /// Log this error through `logger` and terminate.
    ///
    /// Meant for the outermost boundary of an application, once the error
    /// has been propagated up with `?`. [`Error::Panic`] goes through
    /// [`Standard::panic`]; every other kind goes through
    /// [`Standard::fatal`].
    pub fn raise(self, logger: &dyn Standard) -> ! {
        match self {
            Error::Panic(message) => logger.panic(&[Value::from(message)]),
            Error::Fatal(message) => logger.fatal(&[Value::from(message)]),
            other => logger.fatal(&[Value::from(other.to_string())]),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
