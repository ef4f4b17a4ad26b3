//! Logging system initialization
//!
//! Writes to `<data_dir>/IconPicker/app.log` through `tracing-appender`. The
//! previous sessions are shifted to `app.log.1` … `app.log.9` on every start.

use crate::config::manager::APP_DIR_NAME;
use crate::error::{IconPickerError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Number of previous session logs kept next to `app.log`
const MAX_LOG_FILES: u8 = 9;

/// Directory holding the log files
pub fn log_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Initialize the global `tracing` subscriber
///
/// Log level defaults to INFO and can be overridden with `RUST_LOG`. The
/// returned guard flushes the background writer and must live until exit.
pub fn init_logging() -> Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;
    rotate_logs_on_startup(&log_dir.join("app.log"))?;

    // Rotation is done above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| IconPickerError::ConfigError(Box::new(e)))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = fmt()
        .with_writer(writer)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| IconPickerError::ConfigError(Box::new(e)))?;

    tracing::info!(
        "IconPicker v{} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(guard)
}

/// Shift `app.log` to `app.log.1`, `.1` to `.2` and so on, dropping `.9`
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let invalid = || IconPickerError::ConfigError(StringError::new("Invalid log path"));
    let log_dir = log_path.parent().ok_or_else(invalid)?;
    let log_name = log_path.file_name().ok_or_else(invalid)?.to_string_lossy();
    let numbered = |n: u8| log_dir.join(format!("{log_name}.{n}"));

    let oldest = numbered(MAX_LOG_FILES);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for n in (1..MAX_LOG_FILES).rev() {
        let current = numbered(n);
        if current.exists() {
            std::fs::rename(&current, numbered(n + 1))?;
        }
    }

    std::fs::rename(log_path, numbered(1))?;
    Ok(())
}
