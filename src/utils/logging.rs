//! Logging system initialization
//!
//! Tray mode logs to `%APPDATA%\BrightnessTray\app.log`; the previous
//! session's log is rotated to `app.log.1` on startup so the last two
//! sessions are always available. Command mode skips the file entirely and
//! logs warnings to stderr. Level defaults to INFO, configurable via
//! `RUST_LOG`.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::Result;

/// Initialize file logging for the long-running tray process.
pub fn init_logging() -> Result<()> {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    let log_dir = PathBuf::from(appdata).join("BrightnessTray");
    std::fs::create_dir_all(&log_dir)?;

    rotate_previous_log(&log_dir.join("app.log"))?;

    // Rotation handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    tracing::info!("BrightnessTray v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Initialize terse stderr logging for one-shot command invocations.
pub fn init_command_logging() {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();

    // A second invocation in-process (tests) just keeps the first subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Move the previous session's log to `app.log.1`, replacing the one before.
fn rotate_previous_log(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let mut rotated = log_path.as_os_str().to_owned();
    rotated.push(".1");
    std::fs::rename(log_path, PathBuf::from(rotated))?;

    Ok(())
}
