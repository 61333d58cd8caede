//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::Colorize;
use log::{Level, LevelFilter};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging. Logs go
/// to stderr so they never mix with the report on stdout.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every DNS query
/// RUST_LOG=deliverability_check=trace deliverability_check example.com
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug deliverability_check example.com --log-level info
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // hickory logs every malformed or truncated UDP response it recovers from
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Error);
    builder.filter_module("deliverability_check", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(buf, "{}", json_line(record, chrono::Utc::now().timestamp_millis()))
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| writeln!(buf, "{}", plain_line(record)));
        }
    }

    // try_init() instead of init(): tests may initialize the logger more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per record: `ts` (Unix millis), `level`, `target`, `msg`.
fn json_line(record: &log::Record, ts_millis: i64) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

/// `<emoji> <target> [<LEVEL>] <message>`, colored when the terminal allows.
fn plain_line(record: &log::Record) -> String {
    let level = record.level();
    let (emoji, colored_level) = match level {
        Level::Error => ("❌", level.as_str().red()),
        Level::Warn => ("⚠️", level.as_str().yellow()),
        Level::Info => ("✔️", level.as_str().green()),
        Level::Debug => ("🔍", level.as_str().blue()),
        Level::Trace => ("🔬", level.as_str().purple()),
    };
    format!(
        "{emoji} {} [{colored_level}] {}",
        record.target().cyan(),
        record.args()
    )
}
