//! Example of loading logging configuration from YAML.
//!
//! This example demonstrates how to load logging configuration from a
//! `log` section of a YAML document and initialize the logging system.
//!
//! Run with:
//! ```bash
//! cargo run --example config_yaml
//! ```

use std::collections::HashMap;

use loggers::{Advanced, Contextual, Value, global, values};

const CONFIG: &str = r#"
log:
  backend: tracing
  console: true
  level: debug
  format: text
  thread_names: true
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse the YAML configuration
    let root: HashMap<String, serde_yaml::Value> = serde_yaml::from_str(CONFIG)?;
    let config: loggers::LogConfig = serde_yaml::from_value(root["log"].clone())?;

    // Initialize logging with the loaded configuration
    loggers::LogBuilder::from_config(config).init()?;

    global::debug(&values!["This is a debug message"]);
    global::info(&values!["This is an info message"]);

    // Log with structured data
    global::with_fields(&values!["user", "alice", "action", "login"])
        .info(&values!["User performed an action"]);

    global::with_field("error_code", Value::from(404))
        .with_field("path", Value::from("/api/users"))
        .warn(&values!["Resource not found"]);

    Ok(())
}
