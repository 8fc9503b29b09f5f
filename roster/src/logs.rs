//! Diagnostic logging.
//!
//! Logs go to stderr through `tracing`, leaving stdout for the reports
//! themselves. `RUST_LOG` overrides the verbosity picked from `-v` flags.

use tracing_subscriber::EnvFilter;

/// Log level for pipeline progress messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

/// Filter directive for a `-v` count.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Emit a progress message at `level`
pub fn log(level: LogLevel, message: impl AsRef<str>) {
    let message = message.as_ref();
    match level {
        LogLevel::Info => tracing::info!("{}", message),
        LogLevel::Success => tracing::info!(status = "ok", "{}", message),
        LogLevel::Warning => tracing::warn!("{}", message),
    }
}

pub fn log_info(msg: impl AsRef<str>) {
    log(LogLevel::Info, msg);
}

pub fn log_success(msg: impl AsRef<str>) {
    log(LogLevel::Success, msg);
}

pub fn log_warning(msg: impl AsRef<str>) {
    log(LogLevel::Warning, msg);
}
