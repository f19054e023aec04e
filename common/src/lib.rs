pub mod config;
pub mod error;
pub mod level;
use crate::error::CommonError;
pub use crate::level::LogLevel;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;

/// Init the logger
pub fn init_logger(
    // The folder to store the log file
    log_folder: &Path,
    // The log name prefix
    log_name_prefix: &str,
    // The max log level
    max_log_level: LogLevel,
) -> Result<WorkerGuard, CommonError> {
    let (trace_file_appender, _trace_appender_guard) = tracing_appender::non_blocking(
        tracing_appender::rolling::daily(log_folder, log_name_prefix),
    );
    tracing_subscriber::fmt()
        .with_max_level(max_log_level)
        .with_writer(trace_file_appender)
        .with_line_number(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_ansi(false)
        .try_init()
        .map_err(|e| CommonError::Logger(format!("Fail to install log subscriber: {e}")))?;
    Ok(_trace_appender_guard)
}
