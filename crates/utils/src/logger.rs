use serde::Deserialize;
use tracing_subscriber::{
    fmt::{self},
    prelude::*,
    EnvFilter,
};

/// Format for log output.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty-printed format.
    Pretty,
    /// JSON format for structured logging.
    Json,
    /// Minimal format with only essential information.
    Minimal,
}

/// Initializes the logging system.
///
/// Defaults to the `info` level when `RUST_LOG` is not set.
pub fn init_logger(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let base = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Pretty => base
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(false)
                    .with_target(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .init(),
        LogFormat::Json => base.with(fmt::layer().json()).init(),
        LogFormat::Minimal => base.with(fmt::layer().with_level(true).compact()).init(),
    }
}
