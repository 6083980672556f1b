use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Error, LogConfig, Result};

/// Initialize the tracing subscriber with the given configuration and
/// optional CLI verbosity override.
///
/// Records emitted through the `log` crate are forwarded into the installed
/// subscriber. Fails with [`Error::Init`] when a subscriber is already
/// installed or the filter does not parse.
pub fn init_logging(config: &LogConfig, cli_verbose: Option<u8>) -> Result<()> {
    config.validate()?;
    let log_spec = effective_log_spec(config, cli_verbose);

    let env_filter = EnvFilter::try_new(&log_spec).map_err(|e| Error::Init(e.to_string()))?;

    if config.console {
        init_console_only(config, env_filter)
    } else {
        init_no_logging(env_filter)
    }
}

/// Initialize console-only logging.
fn init_console_only(config: &LogConfig, env_filter: EnvFilter) -> Result<()> {
    let fmt_layer_builder = tracing_subscriber::fmt::layer()
        .with_target(config.target)
        .with_thread_ids(config.thread_ids)
        .with_thread_names(config.thread_names)
        .with_ansi(cfg!(feature = "ansi"));

    let fmt_layer = if config.is_json() {
        fmt_layer_builder.json().boxed()
    } else {
        fmt_layer_builder.boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))?;

    Ok(())
}

/// Initialize with no output (for testing or when logging is disabled).
fn init_no_logging(env_filter: EnvFilter) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter)
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))?;

    Ok(())
}

/// Determine the effective log specification, considering config and CLI overrides.
fn effective_log_spec(config: &LogConfig, cli_verbose: Option<u8>) -> String {
    // RUST_LOG takes precedence over everything
    if let Ok(rust_log) = std::env::var("RUST_LOG")
        && !rust_log.is_empty()
    {
        return rust_log;
    }

    // CLI verbose flag overrides config level
    if let Some(verbose) = cli_verbose {
        return match verbose {
            0 => config.level.clone(),
            1 => format!("{},loggers=debug", config.level),
            2 => format!("{},loggers=trace", config.level),
            _ => "trace".to_string(),
        };
    }

    // Use config level with crate-specific override
    if config.level.is_empty() {
        "info,loggers=info".to_string()
    } else {
        format!("{},loggers={}", config.level, config.level)
    }
}
