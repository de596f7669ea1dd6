//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and
//! production environments: env-filter, pretty or JSON console output,
//! and an optional daily-rotating file appender.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, prelude::*};

/// Initialize the logging system.
///
/// # Arguments
/// * `level` - log level used when `RUST_LOG` is unset (e.g. "info")
/// * `json_format` - JSON output for production, pretty for development
/// * `log_dir` - optional directory for daily-rotating file logs
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        fs::create_dir_all(log_dir)?;
        let app_log = RollingFileAppender::new(Rotation::DAILY, log_dir, "roster");

        if json_format {
            let console_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            let file_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Mutex::new(app_log));
            registry.with(console_layer).with(file_layer).init();
        } else {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(app_log));
            registry.with(console_layer).with(file_layer).init();
        }
    } else if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        registry.with(console_layer).init();
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        registry.with(console_layer).init();
    }

    Ok(())
}

/// Console-only convenience initializer.
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}
