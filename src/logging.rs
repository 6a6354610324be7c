//! Log initialization.
//!
//! The terminal is owned by the TUI, so logs go to a file under the
//! user's cache directory instead of stderr. `RUST_LOG` overrides the
//! default filter.

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "foody=debug";

/// Log file name inside the cache directory.
const LOG_FILE: &str = "foody.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not determine a cache directory for the log file")]
    NoCacheDir,
    #[error("failed to create log directory: {0}")]
    CreateDir(#[from] std::io::Error),
}

/// Install the global tracing subscriber writing to the log file.
///
/// The returned guard must stay alive for the lifetime of the process;
/// dropping it stops the background writer and loses buffered lines.
pub fn init() -> Result<WorkerGuard, LoggingError> {
    let dir = log_dir().ok_or(LoggingError::NoCacheDir)?;
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Where the log file lives: `<cache dir>/foody/foody.log`.
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("foody"))
}
