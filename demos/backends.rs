//! The same calls against each backend.
//!
//! Run with:
//! ```bash
//! cargo run --example backends --features time
//! ```

use std::sync::Arc;

use loggers::backend::{LineLogger, line, logkv, tracer::TracingBackend};
use loggers::{Advanced, Contextual, LogConfig, values};

fn exercise(name: &str, logger: &dyn Contextual) {
    let logger = logger.with_fields(&values!["backend", name]);
    logger.debug(&values!["debug details"]);
    logger.info(&values!["connected", "table", "users"]);
    logger.warnf(format_args!("retry {} of {}", 1, 3));
    logger.errorln(&values!["giving", "up"]);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Console subscriber; also forwards `log` records into tracing
    let config = LogConfig::new().with_console(true).with_level("debug".to_string());
    loggers::init_logging(&config, None)?;

    let lines = line::new_logger(Arc::new(LineLogger::stderr().with_prefix("[line] ")));
    exercise("line", &lines);

    exercise("log", &logkv::default_logger());

    exercise("tracing", &TracingBackend::current());

    Ok(())
}
