//! Logging infrastructure for Development Environment Quicklaunch.
//!
//! Application-wide logging goes through the `tracing` ecosystem:
//! - Respects the `RUST_LOG` environment variable
//! - Falls back to a caller-provided default level
//! - Writes to stderr, and optionally to a log file in the app data folder
//!
//! # Example
//!
//! ```no_run
//! use quicklaunch_core::logging::{init_tracing_with_file, LogLevel};
//!
//! let logs = std::path::PathBuf::from("logs");
//! let _guard = init_tracing_with_file(LogLevel::Info, &logs);
//! tracing::info!("Quicklaunch starting");
//! ```

mod types;

pub use types::LogLevel;

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{app_data_dir, ConfigResult};

/// File name of the application log inside the logs folder.
pub const LOG_FILE_NAME: &str = "quicklaunch.log";

/// Initialize global tracing subscriber for application-wide logging.
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(default_level))
        .init();
}

/// Initialize tracing with both stderr and file output.
///
/// Returns the worker guard for the file writer; it must be kept alive for
/// the lifetime of the program or buffered lines are lost. Falls back to
/// stderr-only logging when the logs folder cannot be created.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(logs_dir) {
        init_tracing(default_level);
        tracing::warn!("Failed to create logs folder {}: {}", logs_dir.display(), e);
        return None;
    }

    let appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(env_filter(default_level))
        .init();

    Some(guard)
}

/// Default logs folder (`<app data>/DevelopmentEnvironmentQuicklaunch/logs`).
pub fn default_logs_dir() -> ConfigResult<PathBuf> {
    Ok(app_data_dir()?.join("logs"))
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
    }

    #[test]
    fn default_logs_dir_is_namespaced() {
        if let Ok(dir) = default_logs_dir() {
            assert!(dir.ends_with(Path::new(crate::APP_DIR_NAME).join("logs")));
        }
    }
}
