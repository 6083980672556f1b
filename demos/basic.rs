//! Basic logging example.
//!
//! This example demonstrates the simplest way to set the default logger
//! with the builder API and log through the free functions.

use loggers::{Advanced, Contextual, Value, global, infof, values, warnf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Line logger on stderr with a prefix
    loggers::builder().with_prefix("[basic] ").init()?;

    global::info(&values!["This is an info message"]);
    global::warnln(&values!["This is a", "warning", "message"]);
    infof!("{} + {} = {}", 1, 2, 1 + 2);

    // Scoped logger with attached fields
    let request = global::with_fields(&values!["request_id", "7f3a", "user", "alice"]);
    request.info(&values!["handling request"]);
    warnf!(request => "slow response: {}ms", 840);
    request
        .with_field("status", Value::from(500))
        .error(&values!["request failed"]);

    Ok(())
}
